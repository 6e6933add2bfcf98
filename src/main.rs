#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // Env vars win over the .env file; a missing file is fine in packaged builds.
    dotenvy::dotenv().ok();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

fn main() {
    load_dotenv();
    #[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
    dioxus::launch(mindpal::ui::App);
    #[cfg(not(any(feature = "web", feature = "desktop", feature = "mobile")))]
    eprintln!("mindpal was built without a renderer; enable the web, desktop, or mobile feature");
}
