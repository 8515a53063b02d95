fn main() {
    dashcat::app::cli::run();
}
