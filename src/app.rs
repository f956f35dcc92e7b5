//! Motorcycle Admin App
//!
//! Root component: form on top, listing table below.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{MotorcycleForm, MotorcycleTable};
use crate::config::ApiConfig;
use crate::context::provide_catalog;

#[component]
pub fn App() -> impl IntoView {
    let catalog = provide_catalog(ApiConfig::from_env());

    // Load once on mount
    Effect::new(move |_| {
        let catalog = catalog.clone();
        spawn_local(async move {
            catalog.load().await;
        });
    });

    view! {
        <div class="page">
            <h1 class="page-title">"ระบบจัดการมอเตอร์ไซค์"</h1>
            <MotorcycleForm />
            <MotorcycleTable />
        </div>
    }
}
