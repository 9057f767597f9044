use std::fmt;

/// One entry of the address book. The name is the key; phone and address
/// are free text and never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    name: String,
    phone: String,
    address: String,
}

impl ContactDetails {
    pub fn new(name: String, phone: String, address: String) -> Self {
        ContactDetails {
            name,
            phone,
            address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for ContactDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.name, self.phone, self.address)
    }
}
