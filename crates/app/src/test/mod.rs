//! Shared test infrastructure.

pub(crate) mod db;
pub(crate) mod helpers;

pub(crate) use context::TestContext;

/// Generate one test per behavioural check for each storage backend.
///
/// Every listed function takes a [`TestContext`] and returns a
/// `TestResult`. The Postgres variants start a testcontainers database and
/// need a container runtime.
macro_rules! backend_tests {
    ($($name:ident),+ $(,)?) => {
        mod memory {
            $(
                #[tokio::test]
                async fn $name() -> testresult::TestResult {
                    super::$name($crate::test::TestContext::memory()).await
                }
            )+
        }

        mod postgres {
            $(
                #[tokio::test]
                async fn $name() -> testresult::TestResult {
                    super::$name($crate::test::TestContext::postgres().await).await
                }
            )+
        }
    };
}

pub(crate) use backend_tests;
