use std::collections::HashSet;

/// Phone numbers treated as registered GoPay wallets.
const REGISTERED_PHONE_NUMBERS: [&str; 10] = [
    "081293846571",
    "085773092184",
    "087812349091",
    "082229901765",
    "081317758842",
    "085266104738",
    "085978452203",
    "081996731156",
    "087754209934",
    "083159914870",
];

/// Immutable set of registered phone numbers, built once at startup.
#[derive(Debug, Clone)]
pub struct AllowList {
    numbers: HashSet<String>,
}

impl AllowList {
    /// The fixed registry the simulator ships with.
    pub fn registered() -> Self {
        Self::from_numbers(REGISTERED_PHONE_NUMBERS)
    }

    pub fn from_numbers<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            numbers: numbers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_registered(&self, phone_number: &str) -> bool {
        self.numbers.contains(phone_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixed_number_is_registered() {
        let allow_list = AllowList::registered();
        for number in REGISTERED_PHONE_NUMBERS {
            assert!(allow_list.is_registered(number), "{number} should be registered");
        }
    }

    #[test]
    fn unknown_and_empty_numbers_are_not_registered() {
        let allow_list = AllowList::registered();
        assert!(!allow_list.is_registered("000000000000"));
        assert!(!allow_list.is_registered(""));
        // Exact match only.
        assert!(!allow_list.is_registered(" 081293846571"));
        assert!(!allow_list.is_registered("+6281293846571"));
    }

    #[test]
    fn custom_list() {
        let allow_list = AllowList::from_numbers(["0811"]);
        assert!(allow_list.is_registered("0811"));
        assert!(!allow_list.is_registered("081293846571"));
        assert!(!AllowList::from_numbers(Vec::<String>::new()).is_registered(""));
    }
}
