// Signed-in user stub
// Fixed identity shown in the layout chrome and profile page

/// Display identity of the signed-in user
/// There is no real session behind it; values never change at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub display_name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            display_name: "John Doe",
            email: "john@empresa.com",
            role: "Administrador",
        }
    }
}

impl Identity {
    /// Avatar initials: first letter of up to two name words
    pub fn initials(&self) -> String {
        initials_of(self.display_name)
    }
}

/// Uppercased first letters of the first two words of `name`
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity() {
        let identity = Identity::default();
        assert_eq!(identity.display_name, "John Doe");
        assert_eq!(identity.email, "john@empresa.com");
        assert_eq!(identity.initials(), "JD");
    }

    #[test]
    fn test_initials_of() {
        assert_eq!(initials_of("ana maría lópez"), "AM");
        assert_eq!(initials_of("  single "), "S");
        assert_eq!(initials_of(""), "");
        assert_eq!(initials_of("élise ñandú"), "ÉÑ");
    }
}
