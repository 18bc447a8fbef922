//! Cabeçalho Multiboot (especificação 0.6.96, GRUB legacy).
//!
//! O GRUB procura este registro de 12 bytes nos primeiros 8192 bytes da
//! imagem. O posicionamento é garantido pelo linker script (seção .multiboot
//! primeiro), não por checagem em runtime: se o contrato for violado, o GRUB
//! simplesmente recusa a imagem antes de qualquer código nosso rodar.

use bitflags::bitflags;

/// Magic do cabeçalho que identifica a imagem como Multiboot.
pub const HEADER_MAGIC: u32 = 0x1BAD_B002;

/// Magic que o bootloader entrega em EAX no handoff.
///
/// Esta camada registra o valor no log mas deliberadamente NÃO o valida;
/// validação (se algum dia existir) é responsabilidade do entry.
pub const BOOTLOADER_MAGIC: u32 = 0x2BAD_B002;

bitflags! {
    /// Flags do cabeçalho Multiboot — pedidos da imagem ao bootloader.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HeaderFlags: u32 {
        /// Módulos carregados alinhados em página (4 KiB).
        const PAGE_ALIGN = 1 << 0;
        /// Incluir o mapa de memória na estrutura de boot-info.
        const MEMORY_INFO = 1 << 1;
        /// Pedir modo de vídeo (não usado pelo Brasa).
        const VIDEO_MODE = 1 << 2;
    }
}

/// Configuração de flags com que a imagem do Brasa é construída.
pub const BOOT_FLAGS: HeaderFlags = HeaderFlags::PAGE_ALIGN.union(HeaderFlags::MEMORY_INFO);

/// O registro de 12 bytes consumido pelo GRUB.
///
/// Invariante: `magic + flags + checksum ≡ 0 (mod 2^32)`.
/// Criado uma vez em build-time, nunca mutado.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MultibootHeader {
    pub magic: u32,
    pub flags: u32,
    pub checksum: u32,
}

// O layout é parte do contrato com o GRUB: exatamente 3 palavras LE.
const _: () = assert!(core::mem::size_of::<MultibootHeader>() == 12);

impl MultibootHeader {
    /// Constrói um cabeçalho válido para o conjunto de flags dado.
    ///
    /// O checksum é `-(magic + flags) mod 2^32`, com aritmética wrapping
    /// para que a soma das três palavras feche em zero.
    pub const fn new(flags: HeaderFlags) -> Self {
        let flags = flags.bits();
        Self {
            magic: HEADER_MAGIC,
            flags,
            checksum: HEADER_MAGIC.wrapping_add(flags).wrapping_neg(),
        }
    }

    /// Verifica o invariante `magic + flags + checksum ≡ 0 (mod 2^32)`.
    pub const fn is_valid(&self) -> bool {
        self.magic
            .wrapping_add(self.flags)
            .wrapping_add(self.checksum)
            == 0
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_fecha_em_zero_para_todas_as_flags() {
        let configs = [
            HeaderFlags::empty(),
            HeaderFlags::PAGE_ALIGN,
            HeaderFlags::MEMORY_INFO,
            HeaderFlags::PAGE_ALIGN.union(HeaderFlags::MEMORY_INFO),
            HeaderFlags::all(),
        ];
        for flags in configs {
            let header = MultibootHeader::new(flags);
            assert!(header.is_valid());
            assert_eq!(
                header
                    .magic
                    .wrapping_add(header.flags)
                    .wrapping_add(header.checksum),
                0
            );
        }
    }

    #[test]
    fn test_cenario_flags_0x3() {
        // Cenário de referência: flags 0x3 → checksum -(0x1BADB002 + 0x3)
        let header = MultibootHeader::new(BOOT_FLAGS);
        assert_eq!(header.flags, 0x3);
        assert_eq!(header.checksum, 0xE452_4FFB);
        assert!(header.is_valid());
    }

    #[test]
    fn test_layout_little_endian() {
        // Bytes exatos que o GRUB espera encontrar na imagem.
        let header = MultibootHeader::new(BOOT_FLAGS);
        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&header.magic.to_le_bytes());
        bytes[4..8].copy_from_slice(&header.flags.to_le_bytes());
        bytes[8..12].copy_from_slice(&header.checksum.to_le_bytes());
        assert_eq!(
            bytes,
            [0x02, 0xB0, 0xAD, 0x1B, 0x03, 0x00, 0x00, 0x00, 0xFB, 0x4F, 0x52, 0xE4]
        );
    }
}
