use crate::prelude::{
    AddressBook, AppError, ContactDetails,
    command::{Cli, Command},
};
use clap::Parser;
use dotenv::dotenv;
use log::{LevelFilter, debug, info, trace};
use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

/// Line-oriented front-end over an [`AddressBook`].
///
/// Reads commands from `input` and writes prompts and results to `output`
/// until `quit` is entered or the input runs out.
pub struct TextInterface<R, W> {
    book: AddressBook,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextInterface<R, W> {
    pub fn new(book: AddressBook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "Address Book.")?;
        writeln!(self.output, "Type 'help' for a list of commands.")?;

        loop {
            let Some(command) = self.get_command()? else {
                debug!("input closed, leaving command loop");
                break;
            };
            trace!("dispatching {:?}", command);

            match command {
                Command::Add => self.add()?,
                Command::List => self.list()?,
                Command::Search => self.find()?,
                Command::Help => self.help()?,
                Command::Get => self.get_details()?,
                Command::Remove => self.remove_details()?,
                Command::Quit => break,
                Command::Unknown => {}
            }
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn add(&mut self) -> Result<(), AppError> {
        let Some(name) = self.prompt_field("Name: ")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt_field("Phone: ")? else {
            return Ok(());
        };
        let Some(address) = self.prompt_field("Address: ")? else {
            return Ok(());
        };

        self.book.add(ContactDetails::new(name, phone, address));
        Ok(())
    }

    fn list(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "{}", self.book.list_all())?;
        Ok(())
    }

    fn find(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "Type a prefix of the key to be found.")?;
        let Some(prefix) = self.read_field()? else {
            return Ok(());
        };

        for details in self.book.search_by_prefix(&prefix) {
            writeln!(self.output, "{}", details)?;
            writeln!(self.output, "=====")?;
        }
        Ok(())
    }

    fn help(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "Valid commands are:")?;
        writeln!(self.output, "{}", Command::WORDS.join(" "))?;
        Ok(())
    }

    fn get_details(&mut self) -> Result<(), AppError> {
        let Some(name) = self.prompt_field("Name:  ")? else {
            return Ok(());
        };

        match self.book.get_by_name(&name) {
            Some(details) => {
                writeln!(self.output, "Found\n=====================\nName: {}", details.name())?;
                writeln!(self.output, "Phone:  {}", details.phone())?;
                writeln!(self.output, "Address: {}", details.address())?;
            }
            None => writeln!(self.output, "{} not found in database...", name)?,
        }
        Ok(())
    }

    fn remove_details(&mut self) -> Result<(), AppError> {
        let Some(name) = self.prompt_field("Name:  ")? else {
            return Ok(());
        };

        if !self.book.key_in_use(&name) {
            writeln!(self.output, "{} not found in database...", name)?;
            return Ok(());
        }

        writeln!(self.output, "Are you sure you want to remove {} (y/n)", name)?;
        let Some(answer) = self.read_field()? else {
            return Ok(());
        };

        // Anything but y/Y aborts without a message.
        if answer.to_lowercase() == "y" {
            self.book.remove(&name);
            writeln!(self.output, "{} has been removed.", name)?;
        }
        Ok(())
    }

    fn get_command(&mut self) -> Result<Option<Command>, AppError> {
        self.prompt("> ")?;
        Ok(self.read_field()?.map(|line| Command::parse(&line)))
    }

    fn prompt_field(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompt(prompt)?;
        self.read_field()
    }

    fn prompt(&mut self, prompt: &str) -> Result<(), AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one whole line without its terminator. `None` at end of input.
    /// Bytes that are not valid UTF-8 become U+FFFD.
    fn read_field(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

pub fn init_logging(level: &str) -> Result<(), AppError> {
    let filter = LevelFilter::from_str(level)
        .map_err(|_| AppError::Config(format!("unknown log level '{}'", level)))?;

    env_logger::Builder::new().filter_level(filter).try_init()?;
    Ok(())
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;
    info!("starting address book");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut interface = TextInterface::new(AddressBook::new(), stdin.lock(), stdout.lock());
    interface.run()?;

    info!("address book closed with {} contacts", interface.book().len());
    Ok(())
}
