//! Patient dashboard screen.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppRoute;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1>"Patient Dashboard"</h1>
            <p class="dashboard-page__empty">"No patient records to show yet."</p>
            <A href=AppRoute::Register.path()>"Register a patient"</A>
        </div>
    }
}
