/// Print adapters: hand the HTML report to the host's print dialog
mod browser_print;

pub use browser_print::BrowserPrintSpooler;
