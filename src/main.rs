fn main() -> gtk4::glib::ExitCode {
    dotpad::run()
}
