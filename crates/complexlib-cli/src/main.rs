use std::{env, process::ExitCode, time::Instant};

use complexlib::{
    Complex, ComplexResult, DecimalSeparator, Evaluator, Function, NoopTracer, NumberFormat, OpTracer, Outcome,
    StderrTracer, notation,
};

const USAGE: &str = "usage: complexlib <function> <z> [<w>] [--comma] [--precision N] [--trace]";

/// Command line after option parsing.
struct Invocation {
    function: Function,
    operands: Vec<String>,
    format: NumberFormat,
    trace: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("error: {message}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let result = if invocation.trace {
        let result = run(&invocation, Evaluator::new(StderrTracer::new()));
        let elapsed = start.elapsed();
        eprintln!("time taken: {elapsed:?}");
        result
    } else {
        run(&invocation, Evaluator::new(NoopTracer))
    };

    match result {
        Ok(outcome) => {
            println!("{}", render(outcome, &invocation.format));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<Tr: OpTracer>(invocation: &Invocation, mut evaluator: Evaluator<Tr>) -> ComplexResult<Outcome> {
    let operands = invocation
        .operands
        .iter()
        .map(|text| Complex::parse(text, &invocation.format))
        .collect::<Result<Vec<_>, _>>()?;
    evaluator.call(invocation.function, &operands)
}

fn render(outcome: Outcome, format: &NumberFormat) -> String {
    match outcome {
        Outcome::Complex(value) => value.format(format),
        Outcome::Real(value) => notation::format_real(value, format),
        Outcome::Bool(value) => value.to_string(),
    }
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut format = NumberFormat::new();
    let mut trace = false;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--comma" => format = format.decimal_separator(DecimalSeparator::Comma),
            "--trace" => trace = true,
            "--precision" => {
                let value = iter.next().ok_or("--precision needs a value")?;
                let precision = value
                    .parse()
                    .map_err(|_| format!("invalid precision '{value}'"))?;
                format = format.precision(precision);
            }
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let name = positional.next().ok_or("missing function name")?;
    let function: Function = name.parse().map_err(|_| format!("unknown function '{name}'"))?;
    Ok(Invocation {
        function,
        operands: positional.collect(),
        format,
        trace,
    })
}
