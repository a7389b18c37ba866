// src/noyau/nombre.rs
//
// Tour numérique du noyau :
// - Entier   : entier exact (BigInt), littéraux sans point
// - Flottant : binaire64, dès qu’un littéral contient un point
//
// Règles :
// - Entier ∘ Entier reste Entier (exact, sans limite de taille).
// - Mélange => promotion de l’entier en f64 (débordement si non fini).
// - Un résultat flottant non fini (inf/NaN) est refusé.
// - `/` = division entière “plancher” (vers -∞), jamais la division réelle.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::{ErreurCalcul, ResultatCalcul};

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Entier(BigInt),
    Flottant(f64),
}

impl Nombre {
    pub fn entier(n: i64) -> Self {
        Nombre::Entier(BigInt::from(n))
    }

    pub fn est_nul(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_zero(),
            Nombre::Flottant(x) => *x == 0.0,
        }
    }

    /// Promotion vers f64 (refuse un entier trop grand pour un f64 fini).
    pub fn vers_flottant(&self) -> ResultatCalcul<f64> {
        match self {
            Nombre::Flottant(x) => Ok(*x),
            Nombre::Entier(n) => n
                .to_f64()
                .filter(|x| x.is_finite())
                .ok_or(ErreurCalcul::Debordement),
        }
    }

    pub fn opposer(self) -> Nombre {
        match self {
            Nombre::Entier(n) => Nombre::Entier(-n),
            Nombre::Flottant(x) => Nombre::Flottant(-x),
        }
    }

    pub fn additionner(self, autre: Nombre) -> ResultatCalcul<Nombre> {
        operer(self, autre, |a, b| Ok(a + b), |x, y| Ok(x + y))
    }

    pub fn soustraire(self, autre: Nombre) -> ResultatCalcul<Nombre> {
        operer(self, autre, |a, b| Ok(a - b), |x, y| Ok(x - y))
    }

    pub fn multiplier(self, autre: Nombre) -> ResultatCalcul<Nombre> {
        operer(self, autre, |a, b| Ok(a * b), |x, y| Ok(x * y))
    }

    /// Division plancher : 7/2 = 3, -7/2 = -4, 7.5/2 = 3.0
    pub fn div_entiere(self, autre: Nombre) -> ResultatCalcul<Nombre> {
        if autre.est_nul() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        operer(self, autre, div_plancher_entier, div_plancher_flottant)
    }
}

/// Aiguillage Entier/Flottant commun aux 4 opérations.
fn operer(
    a: Nombre,
    b: Nombre,
    op_entier: impl FnOnce(BigInt, BigInt) -> ResultatCalcul<BigInt>,
    op_flottant: impl FnOnce(f64, f64) -> ResultatCalcul<f64>,
) -> ResultatCalcul<Nombre> {
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => Ok(Nombre::Entier(op_entier(x, y)?)),
        (a, b) => {
            let x = a.vers_flottant()?;
            let y = b.vers_flottant()?;
            let r = op_flottant(x, y)?;
            if r.is_finite() {
                Ok(Nombre::Flottant(r))
            } else {
                Err(ErreurCalcul::Debordement)
            }
        }
    }
}

fn div_plancher_entier(a: BigInt, b: BigInt) -> ResultatCalcul<BigInt> {
    if b.is_zero() {
        return Err(ErreurCalcul::DivisionParZero);
    }
    // `/` et `%` de BigInt tronquent vers 0 : on corrige quand le reste
    // n’a pas le signe du diviseur.
    let q = &a / &b;
    let r = &a % &b;
    if !r.is_zero() && (r.is_negative() != b.is_negative()) {
        Ok(q - 1u32)
    } else {
        Ok(q)
    }
}

/// Division plancher flottante, même algorithme que l’hôte d’origine :
/// fmod, correction de signe, puis floor avec rattrapage d’un demi.
fn div_plancher_flottant(x: f64, y: f64) -> ResultatCalcul<f64> {
    if y == 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }

    // `%` sur f64 = fmod (signe du dividende)
    let reste = x % y;
    let mut div = (x - reste) / y;
    if reste != 0.0 && (y < 0.0) != (reste < 0.0) {
        div -= 1.0;
    }

    if div != 0.0 {
        let mut plancher = div.floor();
        if div - plancher > 0.5 {
            plancher += 1.0;
        }
        Ok(plancher)
    } else {
        Ok(0.0_f64.copysign(x / y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(n: i64) -> Nombre {
        Nombre::entier(n)
    }

    fn f(x: f64) -> Nombre {
        Nombre::Flottant(x)
    }

    #[test]
    fn division_plancher_entiers() {
        assert_eq!(e(7).div_entiere(e(2)), Ok(e(3)));
        assert_eq!(e(-7).div_entiere(e(2)), Ok(e(-4)));
        assert_eq!(e(7).div_entiere(e(-2)), Ok(e(-4)));
        assert_eq!(e(-7).div_entiere(e(-2)), Ok(e(3)));
        assert_eq!(e(6).div_entiere(e(3)), Ok(e(2)));
        assert_eq!(e(0).div_entiere(e(5)), Ok(e(0)));
    }

    #[test]
    fn division_plancher_flottants() {
        assert_eq!(f(7.5).div_entiere(e(2)), Ok(f(3.0)));
        assert_eq!(f(-7.5).div_entiere(e(2)), Ok(f(-4.0)));
        assert_eq!(e(1).div_entiere(f(0.3)), Ok(f(3.0)));
        assert_eq!(f(7.0).div_entiere(f(-0.5)), Ok(f(-14.0)));
    }

    #[test]
    fn division_par_zero() {
        assert_eq!(e(1).div_entiere(e(0)), Err(ErreurCalcul::DivisionParZero));
        assert_eq!(e(1).div_entiere(f(0.0)), Err(ErreurCalcul::DivisionParZero));
        assert_eq!(f(0.0).div_entiere(f(-0.0)), Err(ErreurCalcul::DivisionParZero));
    }

    #[test]
    fn promotion_mixte() {
        assert_eq!(e(1).additionner(f(0.5)), Ok(f(1.5)));
        assert_eq!(f(1.5).multiplier(e(2)), Ok(f(3.0)));
        assert_eq!(e(2).soustraire(e(5)), Ok(e(-3)));
    }

    #[test]
    fn entiers_exacts_au_dela_de_i64() {
        let grand = Nombre::Entier(BigInt::from(i64::MAX));
        let r = grand.clone().multiplier(grand).unwrap();
        let attendu = BigInt::from(i64::MAX) * BigInt::from(i64::MAX);
        assert_eq!(r, Nombre::Entier(attendu));
    }

    #[test]
    fn debordements() {
        assert_eq!(f(1e308).multiplier(e(10)), Err(ErreurCalcul::Debordement));

        let enorme = Nombre::Entier(BigInt::from(10).pow(400));
        assert_eq!(enorme.additionner(f(1.0)), Err(ErreurCalcul::Debordement));
    }
}
