use {
    crate::cli::{GenerateArgs, Glbind},
    clap::CommandFactory,
    std::io::stdout,
};

pub fn main(args: GenerateArgs) {
    let stdout = stdout();
    let mut stdout = stdout.lock();
    clap_complete::generate(args.shell, &mut Glbind::command(), "glbind", &mut stdout);
}
