use super::token::*;

pub trait VisitTerm {
    type Output;

    fn visit<A: AcceptTerm>(&mut self, a: &A) -> Self::Output {
        a.accept(self)
    }

    fn visit_operator(&mut self, x: &Operator) -> Self::Output;

    fn visit_constant(&mut self, x: &Constant<'_>) -> Self::Output;

    fn visit_dice(&mut self, x: &DiceDirective) -> Self::Output;

    fn visit_comment(&mut self, x: &Comment<'_>) -> Self::Output;
}

#[enum_dispatch::enum_dispatch]
pub trait AcceptTerm {
    fn accept<V: VisitTerm + ?Sized>(&self, v: &mut V) -> V::Output;
}

impl AcceptTerm for Operator {
    fn accept<V: VisitTerm + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_operator(self)
    }
}

impl AcceptTerm for Constant<'_> {
    fn accept<V: VisitTerm + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_constant(self)
    }
}

impl AcceptTerm for DiceDirective {
    fn accept<V: VisitTerm + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_dice(self)
    }
}

impl AcceptTerm for Comment<'_> {
    fn accept<V: VisitTerm + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_comment(self)
    }
}
