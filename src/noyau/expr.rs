// src/noyau/expr.rs
//
// Arbre d’expression arithmétique.
// - Num        : feuille numérique
// - Neg / Pos  : signes unaires
// - Add / Sub / Mul : opérations usuelles
// - DivEntiere : `/` du langage = division plancher
//
// La hauteur de l’arbre n’est bornée que par la longueur de l’entrée
// ("1+1+...+1", "----1") : évaluation, affichage et libération passent
// par une pile explicite, jamais par la récursion.

use std::fmt;

use num_bigint::BigInt;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::nombre::Nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(Nombre),

    Neg(Box<Expr>),
    Pos(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    DivEntiere(Box<Expr>, Box<Expr>),
}

/// Parcours postfixe : on visite les fils, puis on applique le noeud.
enum Tache<'a> {
    Visiter(&'a Expr),
    Appliquer(&'a Expr),
}

impl Expr {
    /// Évaluation de l’arbre (gauche puis droite), pile de valeurs explicite.
    pub fn eval(&self) -> ResultatCalcul<Nombre> {
        use Expr::*;

        let incoherent = || ErreurCalcul::syntaxe("arbre incohérent");

        let mut taches = vec![Tache::Visiter(self)];
        let mut valeurs: Vec<Nombre> = Vec::new();

        while let Some(tache) = taches.pop() {
            match tache {
                Tache::Visiter(e) => match e {
                    Num(n) => valeurs.push(n.clone()),
                    Neg(x) | Pos(x) => {
                        taches.push(Tache::Appliquer(e));
                        taches.push(Tache::Visiter(&**x));
                    }
                    Add(a, b) | Sub(a, b) | Mul(a, b) | DivEntiere(a, b) => {
                        taches.push(Tache::Appliquer(e));
                        taches.push(Tache::Visiter(&**b));
                        taches.push(Tache::Visiter(&**a));
                    }
                },

                Tache::Appliquer(e) => {
                    let r = match e {
                        Num(_) => return Err(incoherent()),
                        Neg(_) => valeurs.pop().ok_or_else(incoherent)?.opposer(),
                        Pos(_) => valeurs.pop().ok_or_else(incoherent)?,
                        _ => {
                            let b = valeurs.pop().ok_or_else(incoherent)?;
                            let a = valeurs.pop().ok_or_else(incoherent)?;
                            match e {
                                Add(..) => a.additionner(b)?,
                                Sub(..) => a.soustraire(b)?,
                                Mul(..) => a.multiplier(b)?,
                                _ => a.div_entiere(b)?,
                            }
                        }
                    };
                    valeurs.push(r);
                }
            }
        }

        match (valeurs.pop(), valeurs.is_empty()) {
            (Some(v), true) => Ok(v),
            _ => Err(incoherent()),
        }
    }

    /// (gauche, symbole, droite) pour un noeud binaire.
    fn binaire(&self) -> Option<(&Expr, &'static str, &Expr)> {
        match self {
            Expr::Add(a, b) => Some((&**a, "+", &**b)),
            Expr::Sub(a, b) => Some((&**a, "-", &**b)),
            Expr::Mul(a, b) => Some((&**a, "*", &**b)),
            Expr::DivEntiere(a, b) => Some((&**a, "//", &**b)),
            _ => None,
        }
    }
}

/// Forme entièrement parenthésée (logs trace).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Morceau<'a> {
            Noeud(&'a Expr),
            Texte(&'static str),
        }

        let mut pile = vec![Morceau::Noeud(self)];
        while let Some(m) = pile.pop() {
            let e = match m {
                Morceau::Texte(t) => {
                    f.write_str(t)?;
                    continue;
                }
                Morceau::Noeud(e) => e,
            };

            match e {
                Expr::Num(Nombre::Entier(n)) => write!(f, "{n}")?,
                Expr::Num(Nombre::Flottant(x)) => write!(f, "{x:?}")?,
                Expr::Neg(x) => {
                    f.write_str("-")?;
                    pile.push(Morceau::Noeud(&**x));
                }
                Expr::Pos(x) => {
                    f.write_str("+")?;
                    pile.push(Morceau::Noeud(&**x));
                }
                _ => {
                    if let Some((a, op, b)) = e.binaire() {
                        f.write_str("(")?;
                        pile.push(Morceau::Texte(")"));
                        pile.push(Morceau::Noeud(b));
                        pile.push(Morceau::Texte(op));
                        pile.push(Morceau::Noeud(a));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Libération sans récursion : les sous-arbres non triviaux sont détachés
/// sur une pile, chaque noeud est ensuite libéré avec des fils feuilles.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pile: Vec<Expr> = Vec::new();
        detacher_fils(self, &mut pile);
        while let Some(mut e) = pile.pop() {
            detacher_fils(&mut e, &mut pile);
        }
    }
}

fn detacher_fils(e: &mut Expr, pile: &mut Vec<Expr>) {
    let mut detacher = |fils: &mut Box<Expr>| {
        if !matches!(**fils, Expr::Num(_)) {
            // BigInt nul : pas d’allocation
            let feuille = Expr::Num(Nombre::Entier(BigInt::default()));
            pile.push(std::mem::replace(&mut **fils, feuille));
        }
    };

    match e {
        Expr::Num(_) => {}
        Expr::Neg(x) | Expr::Pos(x) => detacher(x),
        Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::DivEntiere(a, b) => {
            detacher(a);
            detacher(b);
        }
    }
}
