//! Self-tests do caminho de boot (feature `self_test`).
//!
//! Valida, dentro do próprio kernel, os invariantes que não podem ser
//! checados em build-time: o checksum do cabeçalho Multiboot e a sanidade
//! da tabela de construtores montada pelo linker.

use crate::core::boot::ctors;
use crate::core::boot::multiboot::{HeaderFlags, MultibootHeader, BOOT_FLAGS};
use crate::klib::test_framework::{run_test_suite, TestCase, TestResult};

/// Executa a suite de boot. Chamado pelo `kernel_main` antes do banner VGA.
pub fn run_boot_tests() {
    const TESTS: &[TestCase] = &[
        TestCase {
            name: "multiboot_header_checksum",
            func: test_header_checksum,
        },
        TestCase {
            name: "multiboot_header_flags_declaradas",
            func: test_header_flag_configs,
        },
        TestCase {
            name: "ctor_table_bounds",
            func: test_ctor_table_bounds,
        },
    ];

    run_test_suite("boot", TESTS);
}

fn test_header_checksum() -> TestResult {
    let header = MultibootHeader::new(BOOT_FLAGS);
    if header.is_valid() && header.checksum == 0xE452_4FFB {
        TestResult::Passed
    } else {
        TestResult::Failed
    }
}

fn test_header_flag_configs() -> TestResult {
    // O invariante de soma zero vale para qualquer configuração declarada
    let configs = [
        HeaderFlags::empty(),
        HeaderFlags::PAGE_ALIGN,
        HeaderFlags::MEMORY_INFO,
        HeaderFlags::VIDEO_MODE,
        HeaderFlags::all(),
    ];
    for flags in configs {
        if !MultibootHeader::new(flags).is_valid() {
            return TestResult::Failed;
        }
    }
    TestResult::Passed
}

fn test_ctor_table_bounds() -> TestResult {
    let (start, end) = ctors::table_bounds();
    let (start, end) = (start as usize, end as usize);

    // end >= start, e o intervalo precisa fechar em slots inteiros
    if end < start {
        crate::kerror!("(SelfTest) Tabela de ctors invertida: start=", start);
        return TestResult::Failed;
    }
    if (end - start) % core::mem::size_of::<ctors::Ctor>() != 0 {
        return TestResult::Failed;
    }

    crate::kdebug!(
        "(SelfTest) Ctors na tabela: ",
        (end - start) / core::mem::size_of::<ctors::Ctor>()
    );
    TestResult::Passed
}
