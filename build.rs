// build.rs - Injeta o linker script no binário do kernel.
//
// O layout da imagem (seção .multiboot primeiro, .ctors com símbolos de
// fronteira, .bss por último) é um contrato de link-time: ver linker.ld.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=linker.ld");
    println!("cargo:rerun-if-changed=i686-brasa.json");

    // Só aplicar o script para o target bare-metal (não para builds de host).
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("i686-brasa") {
        println!("cargo:rustc-link-arg-bins=-Tlinker.ld");
    }
}
