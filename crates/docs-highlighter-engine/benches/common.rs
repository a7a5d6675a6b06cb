// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use docs_highlighter_engine::{Document, DocumentBuilder, TextRun};

#[allow(dead_code)]
pub fn generate_java_source(size: usize) -> String {
    let base = "/* Entry point 😀 */\npublic class Main {\n    // say hello\n    public static void main(String[] args) {\n        for (int i = 0; i < 10; i++) {\n            System.out.println(\"héllo \" + i); /* trailing */\n        }\n    }\n}\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_instance_document(instances: usize, body_size: usize) -> Document {
    let body = generate_java_source(body_size);
    let mut builder = DocumentBuilder::new().line(TextRun::plain("Title\n"));
    for _ in 0..instances {
        builder = builder
            .line(TextRun::italic("<code> <conf> #lang=java #theme=light </conf>\n"))
            .line(TextRun::plain(body.clone()))
            .line(TextRun::italic("</code>\n"))
            .line(TextRun::plain("Some prose between the blocks.\n"));
    }
    builder.build()
}
