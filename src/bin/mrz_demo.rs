use mrzscan::{models::PassportForm, PassportScanner, ScanOutcome};

// OCR output as a text-detection service might return it for the ICAO specimen page
const SAMPLE_OCR_TEXT: &str = "\
UTOPIA
PASSPORT / PASSEPORT
Surname / Nom
ERIKSSON
Given names / Prénoms
ANNA MARIA
P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<
L898902C36UTO7408122F1204159ZE184226B<<<<<10
";

fn main() {
    env_logger::init();

    println!("MRZ Decoder Demo");
    println!("----------------");

    let scanner = PassportScanner::new();
    match scanner.scan_text(SAMPLE_OCR_TEXT) {
        ScanOutcome::Decoded(mrz) => {
            let form = PassportForm::from(mrz.as_ref());
            println!("  Surname: {}", form.surname);
            println!("  Given Names: {}", form.given_names);
            println!("  Passport Number: {}", form.passport_number);
            println!("  Nationality: {}", form.nationality);
            println!("  Date of Birth: {}", form.birth_date);
            println!("  Sex: {}", form.sex);
            println!("  Date of Expiry: {}", form.expiry_date);
            println!("  Issuing Country: {}", form.issuing_country);
            println!(
                "\n  Check digits are {}",
                if mrz.check_digits.all_valid() { "VALID" } else { "INVALID" }
            );
        }
        ScanOutcome::NoText => println!("No text detected"),
        ScanOutcome::NoMrz => println!("No MRZ found"),
    }
}
