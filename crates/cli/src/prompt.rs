//! Saisie interactive des paramètres

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

pub const LENGTH_PROMPT: &str = "Entrez la longueur de la séquence : ";
pub const ID_PROMPT: &str = "Entrez l'identifiant de la séquence : ";
pub const DESCRIPTION_PROMPT: &str = "Décrivez la séquence : ";
pub const NAME_PROMPT: &str = "Entrez votre nom : ";

/// Lecture des réponses sur `input`, questions et diagnostics sur `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Rend la sortie (questions et diagnostics écrits)
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Demande une longueur jusqu'à obtenir un entier strictement positif
    pub fn read_length(&mut self) -> io::Result<usize> {
        loop {
            let line = self.ask(LENGTH_PROMPT)?;

            match line.trim().parse::<i64>() {
                Ok(value) if value > 0 => {
                    // Sur une cible 32 bits, i64 peut dépasser usize
                    match usize::try_from(value) {
                        Ok(length) => return Ok(length),
                        Err(_) => self.too_large()?,
                    }
                }
                Ok(_) => self.not_positive()?,
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => self.too_large()?,
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => self.not_positive()?,
                Err(_) => {
                    writeln!(
                        self.output,
                        "Veuillez saisir un entier valide pour la longueur de la séquence."
                    )?;
                }
            }
        }
    }

    fn too_large(&mut self) -> io::Result<()> {
        writeln!(self.output, "La longueur est trop grande pour cette machine.")
    }

    fn not_positive(&mut self) -> io::Result<()> {
        writeln!(self.output, "La longueur doit être un entier strictement positif.")
    }

    /// Demande un texte libre, renvoyé tel quel (éventuellement vide)
    pub fn read_text(&mut self, prompt: &str) -> io::Result<String> {
        self.ask(prompt)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "entrée standard fermée avant la fin de la saisie",
            ));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_length_retries() {
        let mut p = prompter("-5\nabc\n7\n");
        assert_eq!(p.read_length().unwrap(), 7);

        let out = String::from_utf8(p.output).unwrap();
        assert_eq!(out.matches(LENGTH_PROMPT).count(), 3);
        assert_eq!(out.matches("strictement positif").count(), 1);
        assert_eq!(out.matches("entier valide").count(), 1);
    }

    #[test]
    fn test_read_length_zero_rejected() {
        let mut p = prompter("0\n 12 \n");
        assert_eq!(p.read_length().unwrap(), 12);
    }

    #[test]
    fn test_read_length_overflow() {
        let mut p = prompter("99999999999999999999
-99999999999999999999
3
");
        assert_eq!(p.read_length().unwrap(), 3);

        let out = String::from_utf8(p.output).unwrap();
        assert_eq!(out.matches("trop grande").count(), 1);
        assert_eq!(out.matches("strictement positif").count(), 1);
        assert_eq!(out.matches("entier valide").count(), 0);
    }

    #[test]
    fn test_read_length_eof() {
        let mut p = prompter("abc\n");
        let err = p.read_length().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_text_verbatim() {
        let mut p = prompter("  Jean Dupont \n\nlast");
        assert_eq!(p.read_text(NAME_PROMPT).unwrap(), "  Jean Dupont ");
        assert_eq!(p.read_text(DESCRIPTION_PROMPT).unwrap(), "");
        assert_eq!(p.read_text(ID_PROMPT).unwrap(), "last");
    }

    #[test]
    fn test_read_text_crlf() {
        let mut p = prompter("seq1\r\n");
        assert_eq!(p.read_text(ID_PROMPT).unwrap(), "seq1");
    }
}
