use axum::routing::get;
use exceptra::prelude::*;

use crate::modules::person::model::Person;

pub const BASE_PATH: &str = "/api";

/// Routes demonstrating the exception translation boundary.
pub fn router() -> Router {
    Router::new()
        .route("/resourceNotFound", get(resource_not_found))
        .route("/invalidParameter", get(invalid_parameter))
        .route("/persons/{id}", get(get_person))
}

/// A lookup that always misses, to show the translated 400 response.
async fn resource_not_found() -> Result<Json<Person>> {
    let person = Person::new(1, "SnailClimb");
    Err(DomainError::resource_not_found().with_context("person id", person.id))
}

/// A request whose argument never validates.
async fn invalid_parameter() -> Result<Json<Person>> {
    Err(DomainError::invalid_parameter().with_context("parameter", "personId"))
}

/// The one real lookup: person 1 exists, everyone else is missing.
async fn get_person(Path(id): Path<u64>) -> Result<Json<Person>> {
    if id == 1 {
        return Ok(Json(Person::new(1, "SnailClimb")));
    }
    Err(DomainError::resource_not_found().with_context("person id", id))
}
