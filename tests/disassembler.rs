#[test]
fn read_program() {
    use emu6502::{disassemble, AddressableIO, Memory, MemoryImage, RESET_VECTOR_ADDR};

    let init_vector: u16 = 0x0800;
    let mut image = MemoryImage::new();
    image
        .load(
            init_vector,
            &[
                0xa9, 0xc0, 0xaa, 0xe8, 0x69, 0x14, 0x00, 0x4a, 0xd5, 0x20, 0xd0, 0xfe, 0xdb,
                0x6c, 0xfc, 0xff, 0xb6, 0x10, 0x91, 0x80,
            ],
        )
        .unwrap();
    image.set_word(RESET_VECTOR_ADDR, init_vector);
    let memory = Memory::with_default_masks(image);
    let expected_output: Vec<&str> = vec![
        "#0x0800: (a9 c0)       LDA  #$c0",
        "#0x0802: (aa)          TAX",
        "#0x0803: (e8)          INX",
        "#0x0804: (69 14)       ADC  #$14",
        "#0x0806: (00)          BRK",
        "#0x0807: (4a)          LSR  A",
        "#0x0808: (d5 20)       CMP  $20,X",
        "#0x080A: (d0 fe)       BNE  $080A",
        "#0x080C: (db)          ???",
        "#0x080D: (6c fc ff)    JMP  ($fffc)",
        "#0x0810: (b6 10)       LDX  $10,Y",
        "#0x0812: (91 80)       STA  ($80),Y",
    ];

    let start = memory.read_word(RESET_VECTOR_ADDR);
    let output = disassemble(&memory, start, expected_output.len());
    assert_eq!(expected_output.len(), output.len());

    for (expected, line) in expected_output.iter().zip(output) {
        assert_eq!(*expected, format!("{}", line).trim_end());
    }
}

#[test]
fn listing_wraps_around_the_address_space() {
    use emu6502::{disassemble, DisassemblyLine, MemoryImage};

    let mut image = MemoryImage::new();
    image.load(0xfffe, &[0xea, 0x20]).unwrap();
    image.load(0x0000, &[0x00, 0x08]).unwrap();
    let output = disassemble(&image, 0xfffe, 3);

    assert_eq!("#0xFFFE: (ea)          NOP", output[0].to_string().trim_end());
    assert_eq!("#0xFFFF: (20 00 08)    JSR  $0800", output[1].to_string());
    assert!(matches!(output[2], DisassemblyLine::Instruction(_)));
    assert_eq!(0x0002, output[2].address());
}
