use lawncare::core::*;

fn main() {
    let form = InvoiceForm::new("Jane Doe", "12 Elm St", "Springfield", "519-555-0199", "1000");

    let invoice = match form.calculate() {
        Ok(invoice) => invoice,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    print!("{}", lawncare::render::to_text(&invoice));

    // Each of these stops at its first problem.
    for bad in [
        InvoiceForm { name: "  ".into(), ..form.clone() },
        InvoiceForm { phone: "5195550199".into(), ..form.clone() },
        InvoiceForm { sq_feet: "1000.5".into(), ..form.clone() },
    ] {
        match bad.calculate() {
            Ok(_) => println!("accepted (unexpected)"),
            Err(e) => println!("rejected: {e}"),
        }
    }
}
