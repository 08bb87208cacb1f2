//! Exported functions.

use std::future::Future;
use std::sync::Arc;

use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::CodedError;
use futures_util::future::BoxFuture;
use serde_json::Value;

pub type SyncFn = dyn Fn(&[Value]) -> Result<Value, CodedError> + Send + Sync;
pub type AsyncFn = dyn Fn(Vec<Value>) -> BoxFuture<'static, Result<Value, CodedError>> + Send + Sync;

/// The callable part of a function definition.
#[derive(Clone)]
pub enum FunctionBody {
    Sync(Arc<SyncFn>),
    Async(Arc<AsyncFn>),
}

/// A named function with declared argument types.
///
/// Trailing arguments whose descriptor is optional may be omitted by the
/// caller; they are passed to the body as `Value::Null`.
#[derive(Clone)]
pub struct FunctionDefinition {
    name: String,
    args: Vec<TypeDescriptor>,
    body: FunctionBody,
}

impl FunctionDefinition {
    pub fn new_sync<F>(name: impl Into<String>, args: Vec<TypeDescriptor>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CodedError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            args,
            body: FunctionBody::Sync(Arc::new(body)),
        }
    }

    pub fn new_async<F, Fut>(name: impl Into<String>, args: Vec<TypeDescriptor>, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, CodedError>> + Send + 'static,
    {
        let body: Arc<AsyncFn> = Arc::new(
            move |args: Vec<Value>| -> BoxFuture<'static, Result<Value, CodedError>> {
                Box::pin(body(args))
            },
        );
        Self {
            name: name.into(),
            args,
            body: FunctionBody::Async(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[TypeDescriptor] {
        &self.args
    }

    pub fn is_async(&self) -> bool {
        matches!(self.body, FunctionBody::Async(_))
    }

    /// Minimum number of arguments a caller must pass.
    pub fn required_args(&self) -> usize {
        let trailing_optional = self
            .args
            .iter()
            .rev()
            .take_while(|arg| arg.is_nullable())
            .count();
        self.args.len() - trailing_optional
    }

    /// Validate the argument count and pad omitted optional arguments.
    fn prepare_args(&self, mut args: Vec<Value>) -> Result<Vec<Value>, CodedError> {
        let min = self.required_args();
        let max = self.args.len();
        if args.len() < min || args.len() > max {
            return Err(CodedError::argument_count(&self.name, min, max, args.len()));
        }
        args.resize(max, Value::Null);
        Ok(args)
    }

    /// Invoke the function, awaiting it if it is asynchronous.
    pub async fn call(&self, args: Vec<Value>) -> Result<Value, CodedError> {
        let args = self.prepare_args(args)?;
        match &self.body {
            FunctionBody::Sync(body) => body(&args),
            FunctionBody::Async(body) => body(args).await,
        }
    }

    /// Invoke a synchronous function on the current thread.
    ///
    /// Fails for asynchronous functions, which must go through [`call`](Self::call).
    pub fn call_sync(&self, args: Vec<Value>) -> Result<Value, CodedError> {
        let args = self.prepare_args(args)?;
        match &self.body {
            FunctionBody::Sync(body) => body(&args),
            FunctionBody::Async(_) => Err(CodedError::new(
                "ERR_FUNCTION_NOT_SYNC",
                format!("function '{}' is asynchronous", self.name),
            )),
        }
    }
}

impl std::fmt::Debug for FunctionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionDefinition")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("is_async", &self.is_async())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn add() -> FunctionDefinition {
        FunctionDefinition::new_sync(
            "add",
            vec![TypeDescriptor::new("i64"), TypeDescriptor::new("i64")],
            |args| {
                let a = args[0].as_i64().unwrap_or_default();
                let b = args[1].as_i64().unwrap_or_default();
                Ok(json!(a + b))
            },
        )
    }

    #[test]
    fn call_sync_with_exact_arguments() {
        assert_eq!(add().call_sync(vec![json!(2), json!(3)]).unwrap(), json!(5));
    }

    #[test]
    fn call_sync_rejects_wrong_argument_count() {
        let err = add().call_sync(vec![json!(1)]).unwrap_err();
        assert_eq!(err.code, CodedError::ARGUMENT_COUNT);

        let err = add().call_sync(vec![json!(1), json!(2), json!(3)]).unwrap_err();
        assert_eq!(err.code, CodedError::ARGUMENT_COUNT);
    }

    #[test]
    fn trailing_optional_arguments_are_padded_with_null() {
        let greet = FunctionDefinition::new_sync(
            "greet",
            vec![
                TypeDescriptor::new("String"),
                TypeDescriptor::new("String").optional(),
            ],
            |args| Ok(json!(args[1].is_null())),
        );
        assert_eq!(greet.required_args(), 1);
        assert_eq!(greet.call_sync(vec![json!("luna")]).unwrap(), json!(true));
        assert_eq!(
            greet.call_sync(vec![json!("luna"), json!("hi")]).unwrap(),
            json!(false)
        );
    }

    #[test]
    fn optional_argument_before_required_is_still_required() {
        let f = FunctionDefinition::new_sync(
            "f",
            vec![TypeDescriptor::new("i64").optional(), TypeDescriptor::new("i64")],
            |_| Ok(Value::Null),
        );
        assert_eq!(f.required_args(), 2);
    }

    #[tokio::test]
    async fn call_awaits_async_body() {
        let double = FunctionDefinition::new_async(
            "double",
            vec![TypeDescriptor::new("i64")],
            |args| async move { Ok(json!(args[0].as_i64().unwrap_or_default() * 2)) },
        );
        assert!(double.is_async());
        assert_eq!(double.call(vec![json!(21)]).await.unwrap(), json!(42));
    }

    #[tokio::test]
    async fn call_runs_sync_body() {
        assert_eq!(add().call(vec![json!(1), json!(1)]).await.unwrap(), json!(2));
    }

    #[test]
    fn call_sync_rejects_async_function() {
        let f = FunctionDefinition::new_async("f", Vec::new(), |_| async { Ok(Value::Null) });
        let err = f.call_sync(Vec::new()).unwrap_err();
        assert_eq!(err.code, "ERR_FUNCTION_NOT_SYNC");
    }
}
