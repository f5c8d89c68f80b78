//! Context-sharing adapter backed by the Boa engine.
//!
//! Building a Boa context means building a whole realm of intrinsics, so the
//! factory builds exactly one and every evaluator borrows it. Bindings are
//! global properties. On release every global that was not present when the
//! context was built is deleted, whether it came from `bind` or from a
//! snippet assigning to an undeclared name.
//!
//! The shared state lives behind `Rc<RefCell<_>>`: the factory is `!Send`
//! and clearing bindings is not synchronized, so only one thread may drive it.

use crate::cache::SourceCache;
use crate::config::{EngineConfig, SourcePolicy};
use crate::error::{EvalResult, EvaluationError};
use crate::evaluator::{Evaluator, EvaluatorFactory};
use crate::value::ScriptValue;
use boa_engine::object::builtins::JsArray;
use boa_engine::property::Attribute;
use boa_engine::{
    js_string, Context, JsNativeError, JsObject, JsResult, JsString, JsValue, Script, Source,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, warn};

const ENGINE: &str = "boa";

/// Names on the global object of a freshly built context.
struct PristineGlobals {
    names: HashSet<JsString>,
    /// `Object.getOwnPropertyNames`, captured before any snippet can replace it
    list_names: JsObject,
}

impl PristineGlobals {
    fn capture(context: &mut Context) -> JsResult<Self> {
        let object = context.global_object().get(js_string!("Object"), context)?;
        let list_names = match object.as_object() {
            Some(object) => object.get(js_string!("getOwnPropertyNames"), context)?,
            None => JsValue::undefined(),
        };
        let list_names = list_names.as_callable().cloned().ok_or_else(|| {
            JsNativeError::typ().with_message("Object.getOwnPropertyNames is not callable")
        })?;

        let mut pristine = Self {
            names: HashSet::new(),
            list_names,
        };
        pristine.names = pristine.current(context)?.into_iter().collect();
        Ok(pristine)
    }

    fn contains(&self, name: &JsString) -> bool {
        self.names.contains(name)
    }

    /// Own string-keyed properties of the global object right now
    fn current(&self, context: &mut Context) -> JsResult<Vec<JsString>> {
        let global = JsValue::from(context.global_object());
        let listed = self
            .list_names
            .call(&JsValue::undefined(), &[global], context)?;
        let listed = listed.as_object().cloned().ok_or_else(|| {
            JsNativeError::typ().with_message("global property names are not an array")
        })?;
        let array = JsArray::from_object(listed)?;

        let length = array.length(context)?;
        let mut names = Vec::new();
        for index in 0..length {
            if let Some(name) = array.get(index, context)?.as_string() {
                names.push(name.clone());
            }
        }
        Ok(names)
    }

    /// Delete every global that was not there when the context was built
    fn restore(&self, context: &mut Context) -> JsResult<()> {
        let global = context.global_object();
        for name in self.current(context)? {
            if self.contains(&name) {
                continue;
            }
            if let Err(err) = global.delete_property_or_throw(name.clone(), context) {
                warn!(name = %name.to_std_string_escaped(), error = %err, "failed to clear global");
            }
        }
        Ok(())
    }
}

struct SharedState {
    context: RefCell<Context>,
    scripts: RefCell<SourceCache<Script>>,
    pristine: PristineGlobals,
    policy: SourcePolicy,
}

/// Hands out evaluators that all share one Boa context.
pub struct SharedContextFactory {
    state: Rc<SharedState>,
}

impl SharedContextFactory {
    /// Build the shared context and record its built-in globals.
    ///
    /// # Errors
    /// Returns `EvaluationError::Context` if Boa fails to create its realm.
    pub fn new(config: &EngineConfig) -> EvalResult<Self> {
        let context_error = |err: boa_engine::JsError| EvaluationError::Context {
            engine: ENGINE,
            message: err.to_string(),
        };

        let mut context = Context::builder().build().map_err(context_error)?;
        let mut limits = context.runtime_limits();
        limits.set_recursion_limit(config.recursion_limit);
        context.set_runtime_limits(limits);

        let pristine = PristineGlobals::capture(&mut context).map_err(context_error)?;

        debug!(
            policy = ?config.source_policy,
            builtins = pristine.names.len(),
            "built shared boa context"
        );

        Ok(Self {
            state: Rc::new(SharedState {
                context: RefCell::new(context),
                scripts: RefCell::new(SourceCache::new()),
                pristine,
                policy: config.source_policy,
            }),
        })
    }

    /// Number of distinct snippets compiled so far
    pub fn cached_snippets(&self) -> usize {
        self.state.scripts.borrow().len()
    }
}

impl EvaluatorFactory for SharedContextFactory {
    type Evaluator = SharedContextEvaluator;

    fn name(&self) -> &'static str {
        "boa (shared context)"
    }

    fn acquire(&self) -> EvalResult<SharedContextEvaluator> {
        Ok(SharedContextEvaluator {
            state: Rc::clone(&self.state),
        })
    }
}

/// Evaluator over the factory's shared Boa context.
pub struct SharedContextEvaluator {
    state: Rc<SharedState>,
}

impl Evaluator for SharedContextEvaluator {
    /// Built-in globals such as `Math` cannot be bound over.
    fn bind(&mut self, name: &str, value: &ScriptValue) -> EvalResult<()> {
        let key = JsString::from(name);
        if self.state.pristine.contains(&key) {
            return Err(EvaluationError::bind(name, "name is a built-in global"));
        }
        let value = to_js(value).ok_or_else(|| EvaluationError::not_primitive(name, value))?;

        let mut context = self.state.context.borrow_mut();
        context
            .register_global_property(key, value, Attribute::all())
            .map_err(|err| EvaluationError::bind(name, err.to_string()))
    }

    fn evaluate(&mut self, snippet: &str) -> EvalResult<ScriptValue> {
        let mut guard = self.state.context.borrow_mut();
        let context: &mut Context = &mut guard;

        let result = match self.state.policy {
            SourcePolicy::Fresh => context.eval(Source::from_bytes(snippet)),
            SourcePolicy::Cached => {
                let mut scripts = self.state.scripts.borrow_mut();
                scripts
                    .get_or_try_insert_with(snippet, |source| {
                        Script::parse(Source::from_bytes(source), None, context)
                    })
                    .cloned()
                    .and_then(|script| script.evaluate(context))
            }
        };

        result
            .map(|value| from_js(&value))
            .map_err(|err| EvaluationError::script(snippet, err.to_string()))
    }

    fn release(&mut self) {
        let mut guard = self.state.context.borrow_mut();
        if let Err(err) = self.state.pristine.restore(&mut guard) {
            warn!(error = %err, "failed to list globals for release");
        }
    }
}

/// `None` for values that have no lossless JavaScript form.
fn to_js(value: &ScriptValue) -> Option<JsValue> {
    let value = match value {
        ScriptValue::Undefined => JsValue::undefined(),
        ScriptValue::Null => JsValue::null(),
        ScriptValue::Boolean(b) => JsValue::from(*b),
        ScriptValue::Integer(i) => match i32::try_from(*i) {
            Ok(small) => JsValue::from(small),
            Err(_) => JsValue::from(*i as f64),
        },
        ScriptValue::Number(n) => JsValue::from(*n),
        ScriptValue::String(s) => JsValue::from(JsString::from(s.as_str())),
        ScriptValue::Other(_) => return None,
    };
    Some(value)
}

fn from_js(value: &JsValue) -> ScriptValue {
    if value.is_undefined() {
        ScriptValue::Undefined
    } else if value.is_null() {
        ScriptValue::Null
    } else if let Some(b) = value.as_boolean() {
        ScriptValue::Boolean(b)
    } else if let Some(n) = value.as_number() {
        ScriptValue::from_f64(n)
    } else if let Some(s) = value.as_string() {
        ScriptValue::String(s.to_std_string_escaped())
    } else {
        ScriptValue::Other(value.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory() -> SharedContextFactory {
        SharedContextFactory::new(&EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_bind_and_read_back() {
        let factory = factory();
        let mut evaluator = factory.lease().unwrap();

        evaluator.bind("V3", &ScriptValue::Integer(3)).unwrap();
        evaluator.bind("V70", &ScriptValue::from("v70")).unwrap();

        assert_eq!(evaluator.evaluate("V3").unwrap(), ScriptValue::Integer(3));
        assert_eq!(
            evaluator.evaluate("V70").unwrap(),
            ScriptValue::String("v70".to_string())
        );
    }

    #[test]
    fn test_rebinding_overwrites() {
        let factory = factory();
        let mut evaluator = factory.lease().unwrap();

        evaluator.bind("V1", &ScriptValue::Integer(1)).unwrap();
        evaluator.bind("V1", &ScriptValue::Integer(2)).unwrap();

        assert_eq!(evaluator.evaluate("V1").unwrap(), ScriptValue::Integer(2));
    }

    #[test]
    fn test_release_clears_bindings() {
        let factory = factory();

        {
            let mut evaluator = factory.lease().unwrap();
            evaluator.bind("V1", &ScriptValue::Integer(1)).unwrap();
            evaluator.bind("V2", &ScriptValue::Integer(2)).unwrap();
            assert!(evaluator.evaluate("V1 + V2 === 3").unwrap().is_true());
        }

        let mut evaluator = factory.lease().unwrap();
        evaluator.bind("V3", &ScriptValue::Integer(3)).unwrap();
        assert!(evaluator
            .evaluate("typeof V1 === 'undefined' && typeof V2 === 'undefined'")
            .unwrap()
            .is_true());
        assert!(evaluator.evaluate("V3 === 3").unwrap().is_true());
    }

    #[test]
    fn test_release_clears_assigned_globals() {
        let factory = factory();

        {
            let mut evaluator = factory.lease().unwrap();
            evaluator.bind("V1", &ScriptValue::Integer(1)).unwrap();
            assert!(evaluator.evaluate("LEAK = V1 === 1").unwrap().is_true());
        }

        let mut evaluator = factory.lease().unwrap();
        assert_eq!(
            evaluator.evaluate("typeof LEAK").unwrap(),
            ScriptValue::from("undefined")
        );
    }

    #[test]
    fn test_release_keeps_builtins() {
        let factory = factory();

        {
            let mut evaluator = factory.lease().unwrap();
            evaluator.bind("V1", &ScriptValue::Integer(1)).unwrap();
        }

        let mut evaluator = factory.lease().unwrap();
        assert!(evaluator
            .evaluate("typeof Math === 'object' && typeof Object.keys === 'function'")
            .unwrap()
            .is_true());
    }

    #[test]
    fn test_builtin_names_cannot_be_bound() {
        let factory = factory();

        {
            let mut evaluator = factory.lease().unwrap();
            let err = evaluator.bind("Math", &ScriptValue::Integer(1)).unwrap_err();
            assert!(matches!(err, EvaluationError::Bind { .. }));
        }

        let mut evaluator = factory.lease().unwrap();
        assert_eq!(
            evaluator.evaluate("typeof Math").unwrap(),
            ScriptValue::from("object")
        );
    }

    #[test]
    fn test_non_primitive_is_not_bound() {
        let factory = factory();
        let mut evaluator = factory.lease().unwrap();

        let err = evaluator
            .bind("OBJ", &ScriptValue::Other("object".to_string()))
            .unwrap_err();
        assert!(matches!(err, EvaluationError::Bind { .. }));
        assert_eq!(
            evaluator.evaluate("typeof OBJ").unwrap(),
            ScriptValue::from("undefined")
        );
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let factory = factory();
        let mut evaluator = factory.lease().unwrap();

        let err = evaluator.evaluate("V1 ===").unwrap_err();
        assert!(matches!(err, EvaluationError::Script { .. }));
    }

    #[test]
    fn test_cached_policy_compiles_once() {
        let factory = factory();

        for _ in 0..3 {
            let mut evaluator = factory.lease().unwrap();
            evaluator.bind("V1", &ScriptValue::Integer(1)).unwrap();
            assert!(evaluator.evaluate("V1 === 1").unwrap().is_true());
        }

        assert_eq!(factory.cached_snippets(), 1);
    }

    #[test]
    fn test_fresh_policy_skips_cache() {
        let config = EngineConfig::default().with_source_policy(SourcePolicy::Fresh);
        let factory = SharedContextFactory::new(&config).unwrap();

        let mut evaluator = factory.lease().unwrap();
        assert!(evaluator.evaluate("1 + 1 === 2").unwrap().is_true());
        drop(evaluator);

        assert_eq!(factory.cached_snippets(), 0);
    }
}
