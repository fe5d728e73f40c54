macro_rules! fatal {
    ($($tt:tt)*) => {{
        log::error!($($tt)*);
        std::process::exit(1);
    }};
}

mod cli;

fn main() {
    cli::main();
}
