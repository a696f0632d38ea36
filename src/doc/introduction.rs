/*!
# Introductory Tutorial

Write a program in any text editor and save it with a `.bas` extension.
Then pass the file to the interpreter.

```text
PRINT "Hello World
"
```

<pre><code>&nbsp;$ basic hello.bas
&nbsp;Hello World
</code></pre>

A string literal prints exactly as written. There is no newline unless
the string spans a line break. A backslash keeps the next character as it
is, so `\"` puts a quote in a string. Any other expression prints its value on a
line of its own.

```text
x = 3 + 2 * 5
PRINT "x is ", x
```

<pre><code>&nbsp;x is 13
</code></pre>

There are no line numbers. A statement that something jumps to gets a
label instead: a name followed by a colon.

```text
GOSUB greet
GOSUB greet
END
greet: PRINT "hi
"
RETURN
```

<pre><code>&nbsp;hi
&nbsp;hi
</code></pre>

Let's ask for a number and count up to it.

```text
INPUT "How far? ", n
FOR i = 0 TO n
PRINT i
NEXT
```

<pre><code>&nbsp;How far? 3
&nbsp;0
&nbsp;1
&nbsp;2
</code></pre>

The loop stops once `i` reaches 3 so 3 never prints.

Mistakes stop the program with an error. Errors found while reading the
program include the line and columns. Errors found while running include
the line.

<pre><code>&nbsp;$ basic oops.bas
&nbsp;<b>?SYNTAX ERROR IN 1 (2..3); EXPECTED =</b>
</code></pre>

The rest of this manual is reference material. Chapter 1 covers types and
expressions, Chapter 2 the statements, and Chapter 3 the built-in
functions. Appendix A lists the errors.

*/
