use slog::Drain;

/// Terminal logger used by the binaries and the integration tests.
pub fn create_root_logger_for_stdout(component: String) -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).use_file_location().build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    slog::Logger::root(drain, slog::o!("Component" => component))
}
