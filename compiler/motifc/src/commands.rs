//! CLI commands.

use motif_rewrite::{arith, RewriteConfig, RewriteError};

/// Options for `motif eval`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    pub max_steps: Option<usize>,
    /// Print only the final line.
    pub quiet: bool,
}

impl EvalOptions {
    fn config(&self) -> RewriteConfig {
        let config = RewriteConfig::default();
        match self.max_steps {
            Some(n) => config.with_max_steps(n),
            None => config,
        }
    }
}

/// Split `args` into expression words and `eval` options.
///
/// Unknown `--` flags are errors; everything else is part of the expression,
/// so a negative number like `-3` still reaches the tokenizer.
pub fn parse_eval_args(args: &[String]) -> Result<(String, EvalOptions), String> {
    let mut options = EvalOptions::default();
    let mut words = Vec::new();
    for arg in args {
        if let Some(n) = arg.strip_prefix("--max-steps=") {
            let n = n
                .parse()
                .map_err(|_| format!("invalid --max-steps value `{n}`"))?;
            options.max_steps = Some(n);
        } else if arg == "--quiet" || arg == "-q" {
            options.quiet = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option `{arg}`"));
        } else {
            words.push(arg.as_str());
        }
    }
    if words.is_empty() {
        return Err("missing expression".to_owned());
    }
    Ok((words.join(" "), options))
}

/// Reduce `expr`, returning the printed lines.
pub fn eval(expr: &str, options: &EvalOptions) -> Result<Vec<String>, RewriteError> {
    let mut lines = Vec::new();
    arith::evaluate_with(expr, options.config(), |line| lines.push(line.to_owned()))?;
    if options.quiet {
        lines.drain(..lines.len().saturating_sub(1));
    }
    Ok(lines)
}

/// One line per token, `type value`.
pub fn tokens(expr: &str) -> Result<Vec<String>, RewriteError> {
    Ok(arith::tokenize(expr)?
        .iter()
        .map(|t| {
            let field = |key| t.as_record().and_then(|r| r.get(key)).map(ToString::to_string);
            format!(
                "{} {}",
                field("type").unwrap_or_default(),
                field("value").unwrap_or_default()
            )
        })
        .collect())
}
