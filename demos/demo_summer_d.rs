use declargs::{derive::*, Collection, CommandLineParser, Entry, Nargs, Parameter, Summary};

#[derive(Default, DeclargsParser)]
#[declargs(program = "summer")]
struct Parameters {
    #[declargs(help = "The items to sum.")]
    item: Vec<u32>,
}

fn main() {
    let parameters = Parameters::declargs_parse();
    let sum: u32 = parameters.item.iter().sum();
    println!("Sum: {sum}");
}
