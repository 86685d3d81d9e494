//! Blacklist check - flags passwords found in a common-password list.

use crate::blacklist::Blacklist;

use super::SectionResult;

pub fn blacklist_section(password: &str, blacklist: Option<&Blacklist>) -> SectionResult {
    blacklist
        .is_some_and(|list| list.contains(password))
        .then(|| "Password is in the common password list".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> Blacklist {
        ["password", "123456", "qwerty"].into_iter().collect()
    }

    #[test]
    fn test_blacklist_section_common_password() {
        assert!(blacklist_section("Password", Some(&common())).is_some());
    }

    #[test]
    fn test_blacklist_section_uncommon_password() {
        assert_eq!(blacklist_section("x7#Kq!pL2@vN9$wR", Some(&common())), None);
    }

    #[test]
    fn test_blacklist_section_without_list() {
        assert_eq!(blacklist_section("password", None), None);
    }
}
