//! Demo entities that can be placed on a [`Map`](crate::Map).

pub mod company;
pub mod user;

pub use company::Company;
pub use user::User;

#[cfg(test)]
pub(crate) mod fixtures {
    use mapmark_common::generator::DataGenerator;

    /// Generator returning the same values on every call.
    pub struct FixedGenerator {
        pub company: &'static str,
        pub phrase: &'static str,
        pub person: &'static str,
        pub lat: &'static str,
        pub lng: &'static str,
    }

    impl Default for FixedGenerator {
        fn default() -> Self {
            Self {
                company: "Acme",
                phrase: "Synergized zero tolerance paradigm",
                person: "Ada Lovelace",
                lat: "52.0000",
                lng: "20.0000",
            }
        }
    }

    impl DataGenerator for FixedGenerator {
        fn company_name(&mut self) -> String {
            self.company.to_string()
        }

        fn catch_phrase(&mut self) -> String {
            self.phrase.to_string()
        }

        fn full_name(&mut self) -> String {
            self.person.to_string()
        }

        fn latitude(&mut self) -> String {
            self.lat.to_string()
        }

        fn longitude(&mut self) -> String {
            self.lng.to_string()
        }
    }
}
