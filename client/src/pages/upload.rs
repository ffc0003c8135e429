//! Upload page for field imagery.

use leptos::prelude::*;

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <div class="upload-page">
            <h1>"Upload"</h1>
            <p>"Select field imagery to process."</p>
            <a href="/mainPage">"Back"</a>
        </div>
    }
}
