use std::path::Path;

use console::Style;
use pressclip_core::artifact::CompositeArtifact;
use pressclip_core::compose::CompositeSpec;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_compose_summary(
    input: &Path,
    output: &Path,
    spec: &CompositeSpec,
    logo: Option<&Path>,
    artifact: &CompositeArtifact,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Pressclip Composite"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(19)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Caption"),
        s.value.apply_to(spec.page_line())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Date"),
        s.value.apply_to(spec.date_line())
    );
    match logo {
        Some(path) => println!(
            "  {:<14}{}",
            s.label.apply_to("Brand mark"),
            s.path.apply_to(path.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Brand mark"),
            s.disabled.apply_to("none (degraded layout)")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!("{}x{}", artifact.width, artifact.height))
    );
    println!();
}
