use declargs::{prelude::*, CommandLineParser, Condition, Parameter, Scalar, Switch};

fn main() {
    let mut sub: u32 = 0;
    let mut arg_0: bool = false;
    let mut opt_0: bool = false;
    let mut arg_1: bool = false;

    let clp = CommandLineParser::new("sub-command");
    let parser = clp
        .branch(
            // "0" is an undocumented sub-command.
            Condition::new(Scalar::new(&mut sub), "sub")
                .choice(1, "the one sub-command")
                .choice(2, "the two sub-command")
                // "3" isn't a sub-command - only the variants specified via `command(..)` affect the program structure.
                .choice(3, "the three sub-command"),
        )
        .command(0, |sub_command| {
            sub_command
                .add(Parameter::argument(Scalar::new(&mut arg_0), "arg"))
                .add(Parameter::option(
                    Switch::new(&mut opt_0, true),
                    "opt",
                    None,
                ))
        })
        .command(1, |sub_command| {
            sub_command.add(Parameter::argument(Scalar::new(&mut arg_1), "arg"))
        })
        .command(2, |sub_command| sub_command)
        .build();

    parser.parse();

    println!("Used sub-command '{sub}'.");
    match sub {
        0 => {
            println!("arg_0: {arg_0}");
            println!("opt_0: {opt_0}");
            assert!(!arg_1);
        }
        1 => {
            assert!(!arg_0);
            assert!(!opt_0);
            println!("arg_1: {arg_1}");
        }
        2 => {
            println!("argument-less & option-less");
        }
        _ => {
            panic!("impossible - the parser will reject any variants not specified via `command(..)`.")
        }
    }
}
