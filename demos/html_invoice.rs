use lawncare::core::*;

/// A host that keeps a page's output region and alert text in memory.
#[derive(Default)]
struct Page {
    form: InvoiceForm,
    output: String,
    alert: Option<String>,
}

impl InvoiceHost for Page {
    fn read_form(&self) -> InvoiceForm {
        self.form.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn show_invoice(&mut self, invoice: &Invoice) {
        match lawncare::html::to_html(invoice) {
            Ok(html) => self.output = html,
            Err(e) => self.alert = Some(e.to_string()),
        }
    }
}

fn main() {
    let mut page = Page {
        form: InvoiceForm::new("Jane Doe", "12 Elm St", "Springfield", "519-555-0199", "1000"),
        ..Default::default()
    };
    generate_invoice(&mut page);

    match page.alert {
        Some(message) => eprintln!("alert: {message}"),
        None => println!("{}", page.output),
    }
}
