//! Framework de testes do kernel
//!
//! Suites de self-test executadas dentro do próprio kernel durante o boot
//! (feature `self_test`). Resultados saem pela serial.

/// Resultado de teste
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TestResult {
    Passed,
    Failed,
    Skipped,
}

/// Um caso de teste
pub struct TestCase {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

/// Executa suite de testes e devolve (passed, failed, skipped).
pub fn run_test_suite(name: &str, tests: &[TestCase]) -> (usize, usize, usize) {
    crate::kinfo!("=== Executando suite: ");
    crate::kinfo!(name);

    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for test in tests {
        let result = (test.func)();
        match result {
            TestResult::Passed => {
                crate::kinfo!(test.name);
                passed += 1;
            }
            TestResult::Failed => {
                crate::kerror!(test.name);
                failed += 1;
            }
            TestResult::Skipped => {
                crate::kwarn!(test.name);
                skipped += 1;
            }
        }
    }

    crate::kinfo!("Resultados: passed=", passed);
    if failed > 0 {
        crate::kerror!("Resultados: failed=", failed);
    }
    (passed, failed, skipped)
}
