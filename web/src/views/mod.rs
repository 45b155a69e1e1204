use dioxus::prelude::*;

use crate::Route;

mod board;
mod edit;
mod register;
mod users;

pub use board::Board;
pub use edit::Edit;
pub use register::Register;
pub use users::Users;

#[component]
pub fn SiteNav() -> Element {
    rsx! {
        nav { class: "site-nav",
            Link { to: Route::Users {}, "Registrations" }
            Link { to: Route::Register {}, "New Registration" }
            Link { to: Route::Board {}, "Task Board" }
        }
    }
}
