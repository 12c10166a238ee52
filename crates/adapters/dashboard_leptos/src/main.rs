fn main() {
    corpdash_dashboard_leptos::start();
}
