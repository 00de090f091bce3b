use foodgram_ui::app::App;
use gloo_console::log;

fn main() {
    log!("foodgram-ui", env!("CARGO_PKG_VERSION"), "starting");
    yew::Renderer::<App>::new().render();
}
