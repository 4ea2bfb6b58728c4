use clap::Parser;
use std::path::Path;
use std::process;
use turnel::loader::Loader;
use turnel::machine::Machine;
use turnel::types::{MachineError, Outcome, Step, DEFAULT_STEP_LIMIT};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The machine description file to execute
    #[clap(short, long)]
    machine: String,

    /// The input string written onto the tape
    #[clap(short, long, default_value = "")]
    input: String,

    /// Maximum number of steps before giving up
    #[clap(short, long, default_value_t = DEFAULT_STEP_LIMIT)]
    steps: usize,

    /// Print each step of the execution
    #[clap(short = 'd', long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let table = match Loader::load(Path::new(&cli.machine)) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    let mut machine = Machine::new(table, &cli.input).with_step_limit(cli.steps);

    let result = if cli.debug {
        run_with_trace(&mut machine)
    } else {
        machine.run()
    };

    match result {
        Ok(Outcome::Accept) => {
            println!("accept");
            println!("{}", machine.tape());
        }
        Ok(Outcome::Reject) => {
            println!("reject");
            println!("{}", machine.tape());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    }
}

fn run_with_trace(machine: &mut Machine) -> Result<Outcome, MachineError> {
    let print_state = |machine: &Machine| {
        println!(
            "Step: {}, State: {}, Position: {}, Tape: [{}]",
            machine.step_count(),
            machine.state(),
            machine.position(),
            machine.tape()
        );
    };

    print_state(machine);

    while machine.step_count() < machine.step_limit() {
        match machine.step()? {
            Step::Continue => print_state(machine),
            Step::Halted(outcome) => return Ok(outcome),
        }
    }

    machine
        .halted()
        .ok_or(MachineError::StepLimit(machine.step_limit()))
}
