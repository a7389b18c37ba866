// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la syntaxe au passage
// - Puis reconstruire Expr
//
// Règles:
// - '+' / '-' en position d’opérande => signe unaire (Tok::Pos / Tok::Neg),
//   précédence 3 : "-7/2" se lit "(-7)/2".
// - '*' / '/' en position d’opérande => erreur ("2+*3").
// - Pas de multiplication implicite : "2(3)", "(1)(2)", "1 2" => erreur.
// - "()" => erreur (parenthèses vides).

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg | Tok::Pos => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(7), Slash, Num(2)]
///   rpn:    [Num(7), Neg, Num(2), Slash]
///
/// `profondeur_max` borne l’imbrication des parenthèses.
pub fn to_rpn(tokens: &[Tok], profondeur_max: usize) -> ResultatCalcul<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // true tant qu’on attend un opérande (début, après '(' ou après un opérateur)
    let mut attend_operande = true;
    let mut profondeur: usize = 0;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if !attend_operande {
                    return Err(ErreurCalcul::syntaxe("opérateur manquant entre deux valeurs"));
                }
                out.push(tok);
                attend_operande = false;
            }

            Tok::LPar => {
                if !attend_operande {
                    return Err(ErreurCalcul::syntaxe("'(' après une valeur"));
                }
                profondeur += 1;
                if profondeur > profondeur_max {
                    return Err(ErreurCalcul::TropProfond);
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if attend_operande {
                    return Err(ErreurCalcul::syntaxe("')' inattendue"));
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurCalcul::syntaxe("')' sans '(' correspondante"));
                }

                profondeur -= 1;
            }

            Tok::Plus | Tok::Minus if attend_operande => {
                // préfixe : rien à dépiler, il s’applique à ce qui suit
                let signe = if matches!(tok, Tok::Minus) {
                    Tok::Neg
                } else {
                    Tok::Pos
                };
                ops.push(signe);
            }

            Tok::Star | Tok::Slash if attend_operande => {
                return Err(ErreurCalcul::syntaxe("opérateur sans opérande gauche"));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // associativité gauche : on sort tout ce qui est au moins aussi prioritaire
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                attend_operande = true;
            }

            Tok::Neg | Tok::Pos => {
                return Err(ErreurCalcul::syntaxe("signe unaire inattendu en entrée"));
            }
        }
    }

    if attend_operande {
        return Err(ErreurCalcul::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// Pas de borne de hauteur : l’arbre est parcouru sans récursion (voir expr.rs).
pub fn from_rpn(rpn: &[Tok]) -> ResultatCalcul<Expr> {
    let mut st: Vec<Expr> = Vec::new();

    let invalide = || ErreurCalcul::syntaxe("expression invalide");

    for tok in rpn.iter().cloned() {
        let e = match tok {
            Tok::Num(n) => Expr::Num(n),

            Tok::Neg | Tok::Pos => {
                let x = Box::new(st.pop().ok_or_else(invalide)?);
                if matches!(tok, Tok::Neg) {
                    Expr::Neg(x)
                } else {
                    Expr::Pos(x)
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = Box::new(st.pop().ok_or_else(invalide)?);
                let a = Box::new(st.pop().ok_or_else(invalide)?);

                match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    _ => Expr::DivEntiere(a, b),
                }
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::syntaxe("parenthèse inattendue en RPN"))
            }
        };

        st.push(e);
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(invalide()),
    }
}
