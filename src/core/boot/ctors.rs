//! Invocador de construtores globais.
//!
//! Em ambiente freestanding não existe runtime para rodar inicializadores
//! estáticos automaticamente. A solução clássica: o linker script junta os
//! ponteiros de função da seção .ctors em um array contíguo delimitado por
//! `__ctors_start`/`__ctors_end`, e o kernel itera e executa cada um, em
//! ordem de endereço crescente, antes do `kernel_main`.
//!
//! Detalhes de Implementação:
//! - A tabela só é alcançada pelos símbolos de fronteira; o linker script usa
//!   KEEP para que o GC de seções não a descarte como código morto.
//! - Cada slot é chamado exatamente uma vez, uma única vez por boot.
//! - Tabela vazia (start == end) não é erro: zero invocações.

/// Assinatura dos construtores registrados: sem argumentos, sem retorno.
pub type Ctor = extern "C" fn();

// Símbolos definidos pelo Linker Script
extern "C" {
    static __ctors_start: u8;
    static __ctors_end: u8;
}

/// Executa todos os construtores registrados, em ordem de endereço crescente.
///
/// Chamado pelo trampolim de boot (`_start`), depois da stack estar válida e
/// antes do `kernel_main`. É a única garantia de ordenação oferecida:
/// dependências entre construtores precisam ser resolvidas pela ordem das
/// seções no link, fora do controle deste módulo.
#[no_mangle]
pub extern "C" fn invoke_all() {
    let (start, end) = table_bounds();
    unsafe { invoke_range(start, end) };
}

/// Fronteiras (start, end) da tabela de construtores, fixadas em link-time.
pub fn table_bounds() -> (*const Ctor, *const Ctor) {
    let start = unsafe { &raw const __ctors_start as *const Ctor };
    let end = unsafe { &raw const __ctors_end as *const Ctor };
    (start, end)
}

/// Percorre `[start, end)` como um array de ponteiros de função e invoca
/// cada slot uma vez.
///
/// # Safety
/// O chamador garante que o intervalo é um array contíguo de [`Ctor`]
/// válidos (ou vazio), com `end >= start`.
pub unsafe fn invoke_range(start: *const Ctor, end: *const Ctor) {
    let count = (end as usize - start as usize) / core::mem::size_of::<Ctor>();
    for i in 0..count {
        let ctor = start.add(i).read();
        ctor();
    }
}

/// Macro para registrar uma função como construtor global.
///
/// Planta um ponteiro na seção .ctors; o linker o coloca entre os símbolos
/// de fronteira e `invoke_all` o executa no boot.
#[macro_export]
macro_rules! define_ctor {
    ($name:ident, $func:path) => {
        #[link_section = ".ctors"]
        #[used] // Impede que o compilador remova se não for referenciado
        #[allow(non_upper_case_globals)]
        static $name: $crate::core::boot::ctors::Ctor = $func;
    };
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};

    static CALLS: AtomicUsize = AtomicUsize::new(0);
    static ORDER: [AtomicUsize; 3] = [
        AtomicUsize::new(0),
        AtomicUsize::new(0),
        AtomicUsize::new(0),
    ];

    extern "C" fn ctor_a() {
        ORDER[0].store(CALLS.fetch_add(1, Ordering::SeqCst) + 1, Ordering::SeqCst);
    }
    extern "C" fn ctor_b() {
        ORDER[1].store(CALLS.fetch_add(1, Ordering::SeqCst) + 1, Ordering::SeqCst);
    }
    extern "C" fn ctor_c() {
        ORDER[2].store(CALLS.fetch_add(1, Ordering::SeqCst) + 1, Ordering::SeqCst);
    }

    #[test]
    fn test_invoca_cada_slot_uma_vez_em_ordem() {
        CALLS.store(0, Ordering::SeqCst);
        let table: [Ctor; 3] = [ctor_a, ctor_b, ctor_c];
        let start = table.as_ptr();
        let end = unsafe { start.add(table.len()) };

        unsafe { invoke_range(start, end) };

        assert_eq!(CALLS.load(Ordering::SeqCst), 3);
        // Ordem de endereço crescente = ordem do array
        assert_eq!(ORDER[0].load(Ordering::SeqCst), 1);
        assert_eq!(ORDER[1].load(Ordering::SeqCst), 2);
        assert_eq!(ORDER[2].load(Ordering::SeqCst), 3);
    }

    static EMPTY_CALLS: AtomicUsize = AtomicUsize::new(0);

    extern "C" fn ctor_nunca_chamado() {
        EMPTY_CALLS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_tabela_vazia_nao_invoca_nada() {
        let table: [Ctor; 1] = [ctor_nunca_chamado];
        let start = table.as_ptr();

        // start == end: zero invocações, retorno normal
        unsafe { invoke_range(start, start) };

        assert_eq!(EMPTY_CALLS.load(Ordering::SeqCst), 0);
    }
}
