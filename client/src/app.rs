//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::sink::DraftSink;
use crate::pages::{dashboard::DashboardPage, register::RegisterPage};

/// Navigable screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Register,
    Dashboard,
}

impl AppRoute {
    pub const ALL: [Self; 2] = [Self::Register, Self::Dashboard];

    /// Router segment, without the leading slash.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Dashboard => "dashboard",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the submission sink and maps each path to one screen. Unmatched
/// paths render an empty view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(DraftSink::log());

    view! {
        <Title text="Patient Portal"/>

        <Router>
            <Routes fallback=|| ()>
                <Route path=StaticSegment(AppRoute::Register.segment()) view=RegisterPage/>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
            </Routes>
        </Router>
    }
}
