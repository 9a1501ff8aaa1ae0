//! The `User` record and its validated constructor.

use std::fmt;

use crate::error::ValidationError;

/// A user with a non-empty name and a non-negative age.
///
/// Fields are private: [`User::new`] is the only way to build one, so every
/// instance satisfies the invariant for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    age: u64,
    email: String,
}

impl User {
    /// Create a user after validating its inputs.
    ///
    /// The name is checked before the age. The email is accepted as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if `name` is empty, otherwise
    /// [`ValidationError::NegativeAge`] if `age` is below zero.
    pub fn new(
        name: impl Into<String>,
        age: i64,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let Ok(checked_age) = u64::try_from(age) else {
            return Err(ValidationError::NegativeAge { age });
        };

        let user = Self {
            name,
            age: checked_age,
            email: email.into(),
        };
        tracing::debug!(name = %user.name, age = user.age, "user created");
        Ok(user)
    }

    /// The user's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user's age in years.
    #[must_use]
    pub const fn age(&self) -> u64 {
        self.age
    }

    /// The user's email, exactly as given.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Render the user as `Name: <name>, Age: <age>, Email: <email>`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// The age in decimal.
    #[must_use]
    pub fn age_string(&self) -> String {
        self.age.to_string()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Email: {}",
            self.name, self.age, self.email
        )
    }
}
