pub mod catchers;
pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod store;
pub use shared::{models::*, ErrorResponse, Ledger, LedgerError};

use rocket::{Build, Rocket, catchers, routes};

use crate::{
    catchers::{bad_request, internal_error, not_found},
    config::CONFIG,
    cors::Cors,
    routes::{
        all_options, cast_vote, get_results, get_results_by_candidate, list_candidates, read_root,
        register_candidate,
    },
    store::ElectionStore,
};

/// Assembles the service with a fresh, empty election store.
pub fn rocket() -> Rocket<Build> {
    rocket::custom(CONFIG.figment())
        .attach(Cors)
        .manage(ElectionStore::new())
        .mount("/", routes![read_root])
        .mount(
            "/api",
            routes![
                register_candidate,
                list_candidates,
                cast_vote,
                get_results,
                get_results_by_candidate,
                all_options
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                internal_error
            ],
        )
}
