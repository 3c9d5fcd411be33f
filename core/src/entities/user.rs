use html_escape::encode_text;
use mapmark_common::error::MapResult;
use mapmark_common::generator::DataGenerator;
use mapmark_common::geo::Coordinate;
use mapmark_common::mappable::Mappable;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub location: Coordinate,
}

impl User {
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    pub fn generate<G: DataGenerator + ?Sized>(faker: &mut G) -> MapResult<Self> {
        let name = faker.full_name();
        let location = Coordinate::parse(&faker.latitude(), &faker.longitude())?;
        Ok(Self { name, location })
    }
}

impl Mappable for User {
    fn location(&self) -> Coordinate {
        self.location
    }

    fn marker_content(&self) -> String {
        format!("<h1>{}</h1>", encode_text(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::fixtures::FixedGenerator;

    #[test]
    fn generated_from_faker() {
        let mut faker = FixedGenerator {
            lat: "-33.8650",
            lng: "151.2094",
            ..FixedGenerator::default()
        };
        let user = User::generate(&mut faker).unwrap();
        assert_eq!(user, User::new("Ada Lovelace", Coordinate::new(-33.865, 151.2094)));
    }

    #[test]
    fn content_is_the_name() {
        let user = User::new("Ada Lovelace", Coordinate::ORIGIN);
        assert_eq!(user.marker_content(), "<h1>Ada Lovelace</h1>");
    }
}
