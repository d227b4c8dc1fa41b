fn main() {
    dioxus::launch(popup_web::App);
}
