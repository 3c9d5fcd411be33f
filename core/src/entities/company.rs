use html_escape::encode_text;
use mapmark_common::error::MapResult;
use mapmark_common::generator::DataGenerator;
use mapmark_common::geo::Coordinate;
use mapmark_common::mappable::Mappable;

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub company_name: String,
    pub catch_phrase: String,
    pub location: Coordinate,
}

impl Company {
    pub fn new(
        company_name: impl Into<String>,
        catch_phrase: impl Into<String>,
        location: Coordinate,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            catch_phrase: catch_phrase.into(),
            location,
        }
    }

    /// Builds a company entirely from generated data.
    ///
    /// Fails only when the generator hands out a non-numeric coordinate.
    pub fn generate<G: DataGenerator + ?Sized>(faker: &mut G) -> MapResult<Self> {
        let company_name = faker.company_name();
        let catch_phrase = faker.catch_phrase();
        let location = Coordinate::parse(&faker.latitude(), &faker.longitude())?;

        Ok(Self {
            company_name,
            catch_phrase,
            location,
        })
    }
}

impl Mappable for Company {
    fn location(&self) -> Coordinate {
        self.location
    }

    fn marker_content(&self) -> String {
        format!(
            "<h1>{}</h1>\n<h3>{}</h3>",
            encode_text(&self.company_name),
            encode_text(&self.catch_phrase)
        )
    }
}
