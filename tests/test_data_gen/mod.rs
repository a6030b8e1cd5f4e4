//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use colext_core::record::{FieldTable, Record};
use colext_core::schema::DataType;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub city: String,
    pub zip: u32,
}

impl Record for Address {
    fn field_table() -> FieldTable<Self> {
        FieldTable::new()
            .with("City", |a: &Address| a.city.clone())
            .with("Zip", |a: &Address| a.zip)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub age: Option<u8>,
    pub score: f64,
    pub photo: Vec<u8>,
    pub tags: Vec<String>,
    pub address: Address,
}

impl Record for Person {
    fn field_table() -> FieldTable<Self> {
        FieldTable::new()
            .with("Id", |p: &Person| p.id)
            .with("Name", |p: &Person| p.name.clone())
            .with("Age", |p: &Person| p.age)
            .with("Score", |p: &Person| p.score)
            .with("Photo", |p: &Person| p.photo.clone())
            .with_opaque("Tags", DataType::List)
            .with_opaque("Address", DataType::Struct)
    }
}

pub fn person(id: u32, name: &str, age: Option<u8>, city: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        age,
        score: id as f64 / 2.0,
        photo: vec![id as u8],
        tags: vec![],
        address: Address {
            city: city.to_string(),
            zip: 1000 + id,
        },
    }
}

/// Five people with distinct names, listed out of order.
pub fn people() -> Vec<Person> {
    vec![
        person(3, "Carol", Some(41), "Bergen"),
        person(1, "Alice", Some(30), "Oslo"),
        person(5, "Eve", None, "Aarhus"),
        person(2, "Bob", Some(30), "Tromso"),
        person(4, "Dave", Some(25), "Oslo"),
    ]
}

pub fn ids(people: &[Person]) -> Vec<u32> {
    people.iter().map(|p| p.id).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Named {
    pub id: i32,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Valued {
    pub id: i32,
    pub val: &'static str,
}

pub fn named(id: i32, name: &'static str) -> Named {
    Named { id, name }
}

pub fn valued(id: i32, val: &'static str) -> Valued {
    Valued { id, val }
}
