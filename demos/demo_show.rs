use declargs::{derive::*, render_line, CommandLineParser, Entry, Parameter, Scalar, Summary};

#[derive(DeclargsParser)]
#[declargs(program = "greeter", show = line)]
struct Parameters {
    #[declargs(help = "The name to greet.")]
    name: String,
    #[declargs(option, help = "The greeting word.")]
    greeting: String,
}

// The parameter defaults come from this initialization.
impl Default for Parameters {
    fn default() -> Self {
        Self {
            name: String::default(),
            greeting: "Hello".to_string(),
        }
    }
}

fn main() {
    let parameters = Parameters::declargs_parse();
    println!(
        "{greeting}, {name}!",
        greeting = parameters.greeting,
        name = parameters.name
    );
}
