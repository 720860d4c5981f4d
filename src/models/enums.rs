//! Enums used by the session.

/// Age bracket chosen from the entered age
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    Child,    // under 13
    Teenager, // 13 through 19
    Adult,    // 20 and over
}

impl AgeBracket {
    pub fn from_age(age: i64) -> Self {
        if age < 13 {
            AgeBracket::Child
        } else if age < 20 {
            AgeBracket::Teenager
        } else {
            AgeBracket::Adult
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AgeBracket::Child => "You're a child!",
            AgeBracket::Teenager => "You're a teenager!",
            AgeBracket::Adult => "You're an adult!",
        }
    }
}
