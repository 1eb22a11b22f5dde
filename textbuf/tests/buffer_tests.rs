use textbuf::{TextBuffer, TextBufferError};

#[test]
fn test_write_and_read_bytes() {
    let mut buffer = TextBuffer::new();
    buffer.write_byte(b'h').unwrap();
    buffer.write_byte(b'i').unwrap();

    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.peek(), Some(b'h'));
    assert_eq!(buffer.read(), Some(b'h'));
    assert_eq!(buffer.read(), Some(b'i'));
    assert_eq!(buffer.read(), None);
    assert_eq!(buffer.peek(), None);
}

#[test]
fn test_read_does_not_consume_content() {
    let mut buffer = TextBuffer::new();
    buffer.write_bytes(b"abc").unwrap();
    buffer.read();

    assert_eq!(buffer.as_bytes(), b"abc");
}

#[test]
fn test_formatted_without_terminator() {
    let mut buffer = TextBuffer::new();
    buffer
        .write_formatted(format_args!("int {} = {};", "x", 42))
        .unwrap();

    assert_eq!(buffer.as_bytes(), b"int x = 42;");
    assert_eq!(buffer.as_c_str(), Err(TextBufferError::MissingTerminator));
}

#[test]
fn test_formatted_with_terminator() {
    let mut buffer = TextBuffer::new();
    buffer.write_terminated(format_args!("mov {}, {}", "rax", 1)).unwrap();

    assert_eq!(buffer.len(), 10);
    assert_eq!(buffer.as_c_str().unwrap().to_str(), Ok("mov rax, 1"));
    assert_eq!(unsafe { *buffer.as_ptr().add(10) }, 0);
}

#[test]
fn test_terminated_writes_concatenate() {
    let mut buffer = TextBuffer::new();
    buffer.write_terminated(format_args!("push ")).unwrap();
    buffer.write_terminated(format_args!("{}", "rbp")).unwrap();

    assert_eq!(buffer.as_bytes(), b"push rbp");
    assert_eq!(buffer.as_c_str().unwrap().to_bytes(), b"push rbp");
}

#[test]
fn test_fmt_write_macro() {
    use core::fmt::Write;

    let mut buffer = TextBuffer::new();
    write!(buffer, "{:>4}|", 7).unwrap();
    writeln!(buffer, "{:04x}", 255).unwrap();

    assert_eq!(buffer.as_bytes(), b"   7|00ff\n");
}

#[test]
fn test_embedded_io_write() {
    use embedded_io::Write;

    let mut buffer = TextBuffer::new();
    buffer.write_all(b"section .text").unwrap();
    buffer.flush().unwrap();

    assert_eq!(buffer.as_bytes(), b"section .text");
}

#[test]
fn test_extend_reserves() {
    let mut buffer = TextBuffer::new();
    buffer.extend(10_000).unwrap();

    assert!(buffer.capacity() >= 10_000);
    assert!(buffer.is_empty());
}

#[test]
fn test_long_output() {
    let mut buffer = TextBuffer::new();
    for i in 0..1000 {
        buffer.write_formatted(format_args!("{i},")).unwrap();
    }

    let text = core::str::from_utf8(buffer.as_bytes()).unwrap();
    assert!(text.starts_with("0,1,2,"));
    assert!(text.ends_with("998,999,"));
}

#[test]
fn test_formatting_error_is_reported() {
    struct Broken;

    impl core::fmt::Display for Broken {
        fn fmt(&self, _: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            Err(core::fmt::Error)
        }
    }

    let mut buffer = TextBuffer::new();
    assert_eq!(
        buffer.write_formatted(format_args!("a{}", Broken)),
        Err(TextBufferError::Format)
    );
    assert_eq!(
        buffer.write_terminated(format_args!("{}", Broken)),
        Err(TextBufferError::Format)
    );
    assert_eq!(buffer.as_c_str(), Err(TextBufferError::MissingTerminator));
}
