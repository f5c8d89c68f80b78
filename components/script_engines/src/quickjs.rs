//! Context-per-call adapter backed by QuickJS.
//!
//! QuickJS contexts are cheap to create, so every acquisition gets a new one
//! on the factory's runtime and release has nothing to clean up.

use crate::config::EngineConfig;
use crate::error::{EvalResult, EvaluationError};
use crate::evaluator::{Evaluator, EvaluatorFactory};
use crate::value::ScriptValue;
use rquickjs::{Context, Ctx, Runtime, Value};
use tracing::debug;

const ENGINE: &str = "quickjs";

/// Hands out evaluators that each own a fresh QuickJS context.
pub struct FreshContextFactory {
    runtime: Runtime,
}

impl FreshContextFactory {
    /// Build the runtime all contexts are created on.
    ///
    /// # Errors
    /// Returns `EvaluationError::Context` if QuickJS fails to allocate a runtime.
    pub fn new(config: &EngineConfig) -> EvalResult<Self> {
        let runtime = Runtime::new().map_err(|err| context_error(&err))?;
        if let Some(limit) = config.memory_limit {
            runtime.set_memory_limit(limit);
        }
        if let Some(limit) = config.max_stack_size {
            runtime.set_max_stack_size(limit);
        }

        debug!(
            memory_limit = ?config.memory_limit,
            max_stack_size = ?config.max_stack_size,
            "built quickjs runtime"
        );

        Ok(Self { runtime })
    }
}

impl EvaluatorFactory for FreshContextFactory {
    type Evaluator = FreshContextEvaluator;

    fn name(&self) -> &'static str {
        "quickjs (context per call)"
    }

    fn acquire(&self) -> EvalResult<FreshContextEvaluator> {
        let context = Context::full(&self.runtime).map_err(|err| context_error(&err))?;
        Ok(FreshContextEvaluator { context })
    }
}

/// Evaluator owning a throwaway QuickJS context.
pub struct FreshContextEvaluator {
    context: Context,
}

impl Evaluator for FreshContextEvaluator {
    fn bind(&mut self, name: &str, value: &ScriptValue) -> EvalResult<()> {
        if !value.is_primitive() {
            return Err(EvaluationError::not_primitive(name, value));
        }
        self.context
            .with(|ctx| {
                let value = to_js(&ctx, value)?;
                ctx.globals().set(name, value)
            })
            .map_err(|err| EvaluationError::bind(name, err.to_string()))
    }

    fn evaluate(&mut self, snippet: &str) -> EvalResult<ScriptValue> {
        self.context.with(|ctx| match ctx.eval::<Value, _>(snippet) {
            Ok(value) => Ok(from_js(&value)),
            Err(err) => Err(EvaluationError::script(snippet, describe(&ctx, err))),
        })
    }

    fn release(&mut self) {}
}

fn context_error(err: &rquickjs::Error) -> EvaluationError {
    EvaluationError::Context {
        engine: ENGINE,
        message: err.to_string(),
    }
}

/// Pull the pending exception out of the context when there is one.
fn describe(ctx: &Ctx<'_>, err: rquickjs::Error) -> String {
    if !matches!(err, rquickjs::Error::Exception) {
        return err.to_string();
    }
    let caught = ctx.catch();
    match caught.as_exception() {
        Some(exception) => exception.to_string(),
        None => format!("uncaught {:?}", caught),
    }
}

/// Callers filter out `Other` first; it has no JavaScript form.
fn to_js<'js>(ctx: &Ctx<'js>, value: &ScriptValue) -> rquickjs::Result<Value<'js>> {
    let value = match value {
        ScriptValue::Undefined => Value::new_undefined(ctx.clone()),
        ScriptValue::Null => Value::new_null(ctx.clone()),
        ScriptValue::Boolean(b) => Value::new_bool(ctx.clone(), *b),
        ScriptValue::Integer(i) => match i32::try_from(*i) {
            Ok(small) => Value::new_int(ctx.clone(), small),
            Err(_) => Value::new_float(ctx.clone(), *i as f64),
        },
        ScriptValue::Number(n) => Value::new_float(ctx.clone(), *n),
        ScriptValue::String(s) => rquickjs::String::from_str(ctx.clone(), s)?.into_value(),
        ScriptValue::Other(_) => Value::new_undefined(ctx.clone()),
    };
    Ok(value)
}

fn from_js(value: &Value<'_>) -> ScriptValue {
    if value.is_undefined() {
        ScriptValue::Undefined
    } else if value.is_null() {
        ScriptValue::Null
    } else if let Some(b) = value.as_bool() {
        ScriptValue::Boolean(b)
    } else if let Some(i) = value.as_int() {
        ScriptValue::Integer(i64::from(i))
    } else if let Some(n) = value.as_float() {
        ScriptValue::from_f64(n)
    } else if let Some(s) = value.as_string() {
        match s.to_string() {
            Ok(s) => ScriptValue::String(s),
            Err(err) => ScriptValue::Other(format!("unreadable string: {}", err)),
        }
    } else {
        ScriptValue::Other(format!("{:?}", value.type_of()))
    }
}
