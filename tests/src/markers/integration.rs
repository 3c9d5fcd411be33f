#![cfg(test)]
use std::cell::RefCell;
use std::rc::Rc;

use mapmark_common::error::MapError;
use mapmark_common::geo::Coordinate;
use mapmark_common::mappable::Mappable;
use mapmark_core::Map;
use mapmark_core::entities::{Company, User};
use mapmark_core::fake::RandomGenerator;
use mapmark_core::widget::headless::HeadlessMaps;
use mapmark_core::widget::html::HtmlMaps;

/// An entity whose state changes after it has been placed.
struct Courier {
    name: RefCell<String>,
    at: Coordinate,
}

impl Mappable for Courier {
    fn location(&self) -> Coordinate {
        self.at
    }

    fn marker_content(&self) -> String {
        format!("<h1>{}</h1>", self.name.borrow())
    }
}

fn headless_map() -> Map<HeadlessMaps> {
    Map::new(HeadlessMaps::with_regions(["map"]), "map").expect("region is declared")
}

#[test]
fn company_marker_shows_its_name_on_click() -> anyhow::Result<()> {
    let mut map = headless_map();
    let acme = Rc::new(Company::new(
        "Acme",
        "Rockets for roadrunners",
        Coordinate::new(52.0, 20.0),
    ));

    let marker = map.add_marker(acme)?;
    let opened = map.api_mut().click(marker)?;

    assert_eq!(opened.len(), 1);
    assert!(opened[0].window.content().contains("Acme"));
    assert_eq!(opened[0].anchor, marker);
    Ok(())
}

#[test]
fn missing_region_is_an_initialization_error() {
    let result = Map::new(HeadlessMaps::with_regions(["sidebar"]), "map");
    assert!(matches!(result, Err(MapError::Initialization(ref id)) if id == "map"));
}

#[test]
fn each_marker_renders_its_own_entity() -> anyhow::Result<()> {
    let mut map = headless_map();
    let company = map.add_marker(Rc::new(Company::new(
        "Acme",
        "Anvils",
        Coordinate::new(10.0, 10.0),
    )))?;
    let user = map.add_marker(Rc::new(User::new("Wile E.", Coordinate::new(-10.0, -10.0))))?;

    assert_ne!(company, user);
    assert_eq!(map.markers(), [company, user]);
    assert_eq!(map.api().listener_count(company), 1);
    assert_eq!(map.api().listener_count(user), 1);

    let user_content = map.api_mut().click(user)?[0].window.content().to_string();
    let company_content = map.api_mut().click(company)?[0].window.content().to_string();

    assert_eq!(user_content, "<h1>Wile E.</h1>");
    assert!(company_content.contains("Acme"));
    assert!(!company_content.contains("Wile"));
    Ok(())
}

#[test]
fn content_reflects_state_at_click_time() -> anyhow::Result<()> {
    let mut map = headless_map();
    let courier = Rc::new(Courier {
        name: RefCell::new(String::from("before")),
        at: Coordinate::new(1.5, 2.5),
    });

    let marker = map.add_marker(Rc::clone(&courier))?;
    *courier.name.borrow_mut() = String::from("after");

    let opened = map.api_mut().click(marker)?;
    assert_eq!(opened[0].window.content(), "<h1>after</h1>");
    Ok(())
}

#[test]
fn every_valid_coordinate_is_accepted() -> anyhow::Result<()> {
    let mut map = headless_map();
    let corners = [
        (90.0, 180.0),
        (-90.0, -180.0),
        (0.0, 0.0),
        (45.5, -122.6),
    ];
    for (lat, lng) in corners {
        map.add_marker(Rc::new(User::new("corner", Coordinate::new(lat, lng))))?;
    }
    assert_eq!(map.api().marker_count(), corners.len());
    Ok(())
}

#[test]
fn out_of_range_coordinate_is_rejected() {
    let mut map = headless_map();
    let result = map.add_marker(Rc::new(User::new("lost", Coordinate::new(91.0, 0.0))));
    assert!(matches!(
        result,
        Err(MapError::InvalidCoordinate { lat, .. }) if lat == 91.0
    ));
    assert_eq!(map.api().marker_count(), 0);
}

#[test]
fn duplicate_positions_get_separate_markers() -> anyhow::Result<()> {
    let mut map = headless_map();
    let here = Coordinate::new(3.0, 4.0);
    let a = map.add_marker(Rc::new(User::new("a", here)))?;
    let b = map.add_marker(Rc::new(User::new("b", here)))?;
    assert_ne!(a, b);
    assert_eq!(map.api().marker_position(a), map.api().marker_position(b));
    Ok(())
}

#[test]
fn generated_entities_can_be_placed() -> anyhow::Result<()> {
    let mut map = headless_map();
    let mut faker = RandomGenerator::seeded(2024);

    for _ in 0..20 {
        let company = Rc::new(Company::generate(&mut faker)?);
        let content = company.marker_content();
        assert_eq!(content, company.marker_content());
        map.add_marker(company)?;
        map.add_marker(Rc::new(User::generate(&mut faker)?))?;
    }

    assert_eq!(map.markers().len(), 40);
    Ok(())
}

#[test]
fn html_page_snapshots_every_marker() -> anyhow::Result<()> {
    let page = HtmlMaps::new("Demo").with_region("map");
    let mut map = Map::new(page, "map")?;
    map.add_marker(Rc::new(Company::new(
        "Acme & Co",
        "Anvils",
        Coordinate::new(52.0, 20.0),
    )))?;
    map.add_marker(Rc::new(User::new("Ada", Coordinate::new(0.5, 0.5))))?;

    let html = map.into_api().render();
    assert_eq!(html.matches("L.marker(").count(), 2);
    assert!(html.contains("Acme \\u0026amp; Co"));
    assert!(html.contains(".setView([0, 0], 2)"));
    Ok(())
}

// This crate has no direct `tracing` dependency.
#[test]
fn success_macro_needs_no_tracing_dependency() {
    mapmark_common::success!("placed {} markers", 2);
}
