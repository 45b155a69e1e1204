use dioxus::prelude::*;

use ui::StateProvider;
use views::{Board, Edit, Register, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/users")]
    Users {},
    #[route("/register")]
    Register {},
    #[route("/edit")]
    Edit {},
    #[route("/board")]
    Board {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        StateProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/users`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Users {});
    rsx! {}
}
