// src/dispatch.rs

//! Call-request dispatch.
//!
//! [`dispatch`] interprets one [`CallRequest`] against a library:
//! - `help` set: echo the text verbatim and return 0, no lookup.
//! - `exec` set: look the action up and hand it to the executor.
//! - neither: [`ShacklesError::MalformedRequest`].
//!
//! Nothing is retained between calls.

use std::io::Write;

use tracing::debug;

use crate::action::ActionLibrary;
use crate::config::CallRequest;
use crate::errors::{Result, ShacklesError};
use crate::exec::Executor;

/// Run one call request and return the resulting status code.
pub async fn dispatch(
    library: &ActionLibrary,
    executor: &dyn Executor,
    request: &CallRequest,
    out: &mut (dyn Write + Send),
) -> Result<i32> {
    if let Some(help) = &request.help {
        debug!("echoing help text");
        out.write_all(help.as_bytes())?;
        return Ok(0);
    }

    let Some(name) = &request.exec else {
        return Err(ShacklesError::MalformedRequest(
            "call request needs either `help` or `exec`".to_string(),
        ));
    };

    let action = library.lookup(name)?;
    debug!(action = %name, args = ?request.args, "dispatching action");
    executor.execute(action, &request.args, out).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::CallArgs;
    use crate::exec::NoopExecutor;

    fn library() -> ActionLibrary {
        let mut lib = ActionLibrary::new();
        lib.add("where", "pwd", vec![], Some("Print the directory.".into()))
            .unwrap();
        lib.add(
            "install",
            "yum",
            vec!["install".into(), "%(pkg)s".into()],
            None,
        )
        .unwrap();
        lib
    }

    #[tokio::test]
    async fn help_is_echoed_without_lookup() {
        let mut out = Vec::new();
        let request = CallRequest {
            help: Some("usage info".into()),
            exec: Some("missing-action".into()),
            args: CallArgs::new(),
        };

        let status = dispatch(&library(), &NoopExecutor::default(), &request, &mut out)
            .await
            .unwrap();

        assert_eq!(status, 0);
        assert_eq!(out, b"usage info");
    }

    #[tokio::test]
    async fn exec_runs_through_executor() {
        let mut out = Vec::new();
        let mut args = CallArgs::new();
        args.insert("pkg".into(), "git".into());
        args.insert("extra".into(), "ignored".into());

        let status = dispatch(
            &library(),
            &NoopExecutor::default(),
            &CallRequest::exec("install", args),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(status, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Execute ['yum', 'install', 'git']\n"
        );
    }

    #[tokio::test]
    async fn unknown_action_fails_before_output() {
        let mut out = Vec::new();
        let err = dispatch(
            &library(),
            &NoopExecutor::default(),
            &CallRequest::exec("missing-action", CallArgs::new()),
            &mut out,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ShacklesError::ActionNotFound(n) if n == "missing-action"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn empty_request_is_malformed() {
        let mut out = Vec::new();
        let err = dispatch(
            &library(),
            &NoopExecutor::default(),
            &CallRequest::default(),
            &mut out,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ShacklesError::MalformedRequest(_)));
    }
}
