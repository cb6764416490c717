use std::io;

fn main() -> io::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    lazy_gen::demo::run(&mut out)
}
