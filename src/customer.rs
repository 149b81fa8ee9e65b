use crate::error::BookingError;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type CustomerId = Arc<str>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Customer {
    pub name: CustomerId,
}

impl Customer {
    pub fn new(name: &str) -> Result<Customer, BookingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BookingError::invalid_input("customer name must not be blank"));
        }
        Ok(Customer {
            name: Arc::from(name),
        })
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name() {
        assert!(matches!(Customer::new(""), Err(BookingError::InvalidInput(_))));
        assert_eq!("John", Customer::new("John ").unwrap().name.as_ref());
    }
}
